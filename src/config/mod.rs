//! Configuration types and options for the application.
//!
//! This module contains the scanning options used by the scanner and the
//! persistent configuration file they can be loaded from.

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::ScanOptions;
