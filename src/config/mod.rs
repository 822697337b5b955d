//! Argument schema parsing and validation
//!
//! This module handles parsing of the YAML argument schema and validation
//! of its structure.

pub mod parse;
pub mod types;
pub mod validate;

// Re-export main types
pub use parse::*;
pub use types::*;
pub use validate::*;
