//! Argform - a schema-driven command-line argument normalizer
//!
//! Argform reads a YAML schema describing a set of named arguments, builds a
//! command-line parser from it, parses the invocation against that parser,
//! and renders the resulting name/value pairs through a text template to
//! produce its entire output.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

// Re-export commonly used types
pub use error::{ArgformError, Result};

/// Current version of Argform
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
