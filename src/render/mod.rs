//! Template rendering
//!
//! This module shapes parsed argument values into the render context and
//! executes the output template against it.

pub mod context;
pub mod template;

// Re-export main types
pub use context::*;
pub use template::*;
