//! CLI interface and dynamic argument parsing
//!
//! This module preprocesses the invocation token list, builds a parser from
//! the argument schema, and drives the render pipeline.

pub mod app;
pub mod preprocess;

// Re-export main types
pub use app::*;
pub use preprocess::*;
