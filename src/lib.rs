//! Ordering and resolution of arbitrary tool version strings
//!
//! # Modules
//!
//! - [`version`]: Version grammar, comparison, pattern matching and resolution
//! - [`config`]: Configuration file handling
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`cli`]: Command implementations of the `version-ident` binary

pub mod cli;
pub mod config;
pub mod logging;
pub mod version;
