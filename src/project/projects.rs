//! Collection management and ranking for found projects.
//!
//! This module provides the `Projects` struct which wraps the projects found
//! in one scan, orders them by recency and writes them out.

use std::{io, io::Write};

use super::Project;

/// The projects found in one scan of a directory.
///
/// The collection is built once from the scanner output, sorted once with
/// [`Projects::sort_by_recency`] and consumed by [`Projects::write_paths`].
#[derive(Debug, Default)]
pub struct Projects(Vec<Project>);

impl From<Vec<Project>> for Projects {
    /// Wrap the projects returned by the scanner, keeping their order.
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

impl Projects {
    /// Sort the projects so the most recently used comes first.
    ///
    /// Projects are ordered by descending marker modification time. The sort
    /// is stable, so projects with identical times keep the order in which
    /// the scanner produced them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::{path::PathBuf, time::{Duration, UNIX_EPOCH}};
    /// # use listprojects::project::{Project, Projects};
    /// let mut projects: Projects = vec![
    ///     Project::new(PathBuf::from("old"), UNIX_EPOCH + Duration::from_secs(100)),
    ///     Project::new(PathBuf::from("new"), UNIX_EPOCH + Duration::from_secs(300)),
    /// ]
    /// .into();
    ///
    /// projects.sort_by_recency();
    /// assert_eq!(projects.as_slice()[0].path, PathBuf::from("new"));
    /// ```
    pub fn sort_by_recency(&mut self) {
        self.0.sort_by(|a, b| b.modified.cmp(&a.modified));
    }

    /// Write every project path to `out`, one per line.
    ///
    /// Nothing else is written: no header, no timestamps, no summary. On
    /// unix the raw bytes of each path are written, so names that are not
    /// valid UTF-8 come out exactly as they are on disk.
    ///
    /// # Arguments
    ///
    /// * `out` - The destination, usually a locked and buffered stdout
    ///
    /// # Errors
    ///
    /// Returns the first write error; the remaining paths are not written.
    pub fn write_paths<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for project in &self.0 {
            Self::write_path(out, project)?;
        }

        Ok(())
    }

    #[cfg(unix)]
    fn write_path<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
        use std::os::unix::ffi::OsStrExt;

        out.write_all(project.path.as_os_str().as_bytes())?;
        out.write_all(b"\n")
    }

    #[cfg(not(unix))]
    fn write_path<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
        writeln!(out, "{project}")
    }

    /// Get a slice of all projects in the collection.
    ///
    /// # Returns
    ///
    /// A slice containing all projects, in their current order.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
    }
}
