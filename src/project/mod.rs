//! Project representation and ranking.
//!
//! ## Main Parts
//!
//! - [`Project`] - A candidate directory confirmed to hold a `.git/index` marker
//! - [`Projects`] - The collection of projects found in one scan, ranked and written out

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use project::Project;
pub use projects::Projects;
