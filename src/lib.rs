//! # listprojects
//!
//! A small CLI tool that lists the git repositories sitting directly under a
//! directory, most recently used first.
//!
//! This library provides the pipeline behind the binary: enumerating the
//! candidates of a directory, probing each one for a `.git/index` marker, and
//! ranking the surviving projects by the marker's modification time.

pub mod cli;
pub mod config;
pub mod project;
pub mod scanner;
