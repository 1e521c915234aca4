//! # listprojects
//!
//! List the git repositories directly under a directory, ordered by the
//! modification time of their `.git/index` file (most recently used first).
//!
//! The output is one path per line with nothing else around it, so it can be
//! fed straight into a picker.
//!
//! ## Usage
//!
//! ```bash
//! # Most recently used projects first
//! listprojects ~/Projects
//!
//! # Pick one interactively
//! cd "$(listprojects ~/Projects | fzf)"
//!
//! # Report unexpected probe failures on stderr
//! listprojects --verbose ~/Projects
//! ```

use std::{
    io::{self, BufWriter, Write},
    process::exit,
};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use listprojects::{cli::Cli, config::FileConfig, project::Projects, scanner::Scanner};

/// Entry point for the listprojects application.
///
/// This function handles all errors by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Configures the thread pool used for probing
/// 4. Scans the target directory for projects
/// 5. Ranks them by recency and writes their paths to stdout
///
/// # Errors
///
/// This function can return errors from:
/// - Thread pool configuration
/// - Reading the target directory
/// - Writing to stdout
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    };

    let scan_options = args.scan_options(&file_config);

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let scanner = Scanner::new(scan_options);

    let mut projects: Projects = scanner.scan_directory(&args.dir)?.into();
    projects.sort_by_recency();

    let mut out = BufWriter::new(io::stdout().lock());
    projects
        .write_paths(&mut out)
        .and_then(|()| out.flush())
        .context("Failed to write project list")?;

    Ok(())
}
