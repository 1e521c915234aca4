//! Core project data structure.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
    time::SystemTime,
};

/// A git repository found directly under the scanned directory.
///
/// A `Project` is only ever built from a successful probe: its `modified`
/// time is the modification time of `<path>/.git/index` at probe time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// The candidate path, as joined from the scanned directory and entry name
    ///
    /// This is not canonicalized, so a relative target directory yields
    /// relative project paths.
    pub path: PathBuf,

    /// Last modification time of the project's `.git/index` file
    pub modified: SystemTime,
}

impl Project {
    /// Create a new project from its path and marker modification time.
    ///
    /// # Arguments
    ///
    /// * `path` - The candidate path the marker was found under
    /// * `modified` - Modification time of `<path>/.git/index`
    #[must_use]
    pub const fn new(path: PathBuf, modified: SystemTime) -> Self {
        Self { path, modified }
    }
}

impl Display for Project {
    /// Projects display as their bare path, lossily converted to UTF-8.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.path.display())
    }
}
