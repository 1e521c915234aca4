//! Directory scanning and project detection functionality.
//!
//! This module lists the direct entries of a directory and probes each one
//! for a `.git/index` marker file. Probing runs in parallel and tolerates
//! every per-entry failure; only failing to read the directory itself is an
//! error.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::SystemTime,
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{config::ScanOptions, project::Project};

/// Directory scanner for detecting git projects.
///
/// The `Scanner` looks exactly one level deep: every entry of the scanned
/// directory is a candidate, and a candidate is a project when
/// `<candidate>/.git/index` can be stat-ed.
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Arguments
    ///
    /// * `scan_options` - Configuration for scanning behavior (verbosity, threads)
    ///
    /// # Examples
    ///
    /// ```
    /// # use listprojects::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions {
    ///     verbose: true,
    ///     threads: 4,
    /// });
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// Scan a directory for git projects.
    ///
    /// This method operates in two phases:
    /// 1. Listing the direct entries of `root`
    /// 2. Probing every entry in parallel for a `.git/index` marker
    ///
    /// In verbose mode, unexpected probe failures are printed to stderr once
    /// the scan is done.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory whose entries are candidates
    ///
    /// # Returns
    ///
    /// The projects found, in listing order. Ranking them is left to
    /// [`crate::project::Projects::sort_by_recency`].
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist, is not a directory, or
    /// cannot be read. Failures while probing an entry are never errors.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use listprojects::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default());
    /// let projects = scanner.scan_directory(Path::new("/home/user/Projects"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<Project>> {
        let (projects, errors) = Self::collect_projects(root)?;

        if self.scan_options.verbose {
            for error in &errors {
                eprintln!("{}", error.red());
            }
        }

        Ok(projects)
    }

    /// List and probe the candidates of `root`.
    ///
    /// # Returns
    ///
    /// The projects found, in listing order, and a message for every probe
    /// that failed for a reason other than an expected miss.
    fn collect_projects(root: &Path) -> Result<(Vec<Project>, Vec<String>)> {
        let errors = Arc::new(Mutex::new(Vec::<String>::new()));

        let projects: Vec<Project> = Self::list_candidates(root)?
            .into_par_iter()
            .filter_map(|candidate| match Self::probe(&candidate) {
                Ok(modified) => Some(Project::new(candidate, modified)),
                Err(e) => {
                    Self::record_failure(&candidate, &e, &errors);
                    None
                }
            })
            .collect();

        let errors = errors
            .lock()
            .map(|mut errors| std::mem::take(&mut *errors))
            .unwrap_or_default();

        Ok((projects, errors))
    }

    /// List the direct entries of `root` as candidate paths.
    ///
    /// Every entry is returned, files and directories alike, joined onto
    /// `root` without any canonicalization.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory to list
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened or an entry cannot
    /// be read from it.
    pub fn list_candidates(root: &Path) -> Result<Vec<PathBuf>> {
        fs::read_dir(root)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|entry| root.join(entry.file_name())))
                    .collect::<io::Result<Vec<_>>>()
            })
            .with_context(|| format!("Failed to read directory {}", root.display()))
    }

    /// Path of the marker file whose modification time ranks `candidate`.
    #[must_use]
    pub fn marker_path(candidate: &Path) -> PathBuf {
        candidate.join(".git").join("index")
    }

    /// Read the modification time of a candidate's `.git/index` marker.
    ///
    /// The metadata query follows symlinks, so a symlinked repository is
    /// ranked by the marker it points to.
    fn probe(candidate: &Path) -> io::Result<SystemTime> {
        fs::metadata(Self::marker_path(candidate)).and_then(|metadata| metadata.modified())
    }

    /// Record a probe failure unless it is an expected miss.
    fn record_failure(candidate: &Path, error: &io::Error, errors: &Arc<Mutex<Vec<String>>>) {
        if Self::is_expected_miss(error) {
            return;
        }

        if let Ok(mut errors) = errors.lock() {
            errors.push(format!(
                "Failed to probe {}: {error}",
                Self::marker_path(candidate).display()
            ));
        }
    }

    /// Check whether a probe failure just means "not a project".
    ///
    /// The marker not existing and a path segment not being a directory are
    /// expected for most entries and never reported.
    fn is_expected_miss(error: &io::Error) -> bool {
        matches!(
            error.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        )
    }
}
