//! Scanning configuration.

/// Resolved options controlling how a directory is scanned.
///
/// Built from the CLI arguments layered over the configuration file, see
/// [`crate::cli::Cli::scan_options`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether to report unexpected probe failures on stderr
    pub verbose: bool,

    /// Number of threads used for probing; `0` lets rayon pick
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_options() {
        let options = ScanOptions::default();

        assert!(!options.verbose);
        assert_eq!(options.threads, 0);
    }
}
