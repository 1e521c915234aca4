//! Command-line interface definition.
//!
//! The directory to scan is the only required argument. Scanning flags are
//! optional and fall back to the configuration file, then to hardcoded
//! defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{FileConfig, ScanOptions};

/// Options controlling how candidates are probed.
#[derive(Parser)]
struct ScanningArgs {
    /// The number of threads to use for probing (0 = one per core)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Report unexpected errors that occur while probing candidates
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// List git repositories under a directory, most recently used first.
#[derive(Parser)]
#[command(name = "listprojects", version)]
#[command(
    about = "List the git repositories directly under a directory, most recently used first"
)]
pub struct Cli {
    /// The directory whose subdirectories are listed
    pub dir: PathBuf,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Resolve the scanning options.
    ///
    /// Precedence is **CLI argument > config file > default**. The `--verbose`
    /// flag can only turn verbosity on; a config file setting it to `true` is
    /// honoured when the flag is absent.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn config_from(toml_content: &str) -> FileConfig {
        toml::from_str(toml_content).unwrap()
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Cli::try_parse_from(["listprojects"]).is_err());
    }

    #[test]
    fn test_single_directory_argument() {
        let cli = parse(&["listprojects", "/home/user/Projects"]);
        assert_eq!(cli.dir, PathBuf::from("/home/user/Projects"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["listprojects", "a", "b"]).is_err());
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let cli = parse(&["listprojects", "."]);
        let options = cli.scan_options(&FileConfig::default());

        assert!(!options.verbose);
        assert_eq!(options.threads, 0);
    }

    #[test]
    fn test_flags_parsed() {
        let cli = parse(&["listprojects", "-v", "--threads", "3", "."]);
        let options = cli.scan_options(&FileConfig::default());

        assert!(options.verbose);
        assert_eq!(options.threads, 3);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cli = parse(&["listprojects", "."]);
        let config = config_from("[scanning]\nthreads = 8\nverbose = true\n");
        let options = cli.scan_options(&config);

        assert!(options.verbose);
        assert_eq!(options.threads, 8);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["listprojects", "-t", "2", "."]);
        let config = config_from("[scanning]\nthreads = 8\n");
        let options = cli.scan_options(&config);

        assert_eq!(options.threads, 2);
    }
}
