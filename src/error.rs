//! Error types for Argform

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Argform operations
pub type Result<T> = std::result::Result<T, ArgformError>;

/// Main error type for Argform
#[derive(Error, Debug)]
pub enum ArgformError {
    /// Schema-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template loading and rendering errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Schema parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read schema file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Argument name cannot be empty")]
    EmptyName,

    #[error("Argument '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("Invalid default value for argument '{long}': {reason}")]
    DefaultCoercion { long: String, reason: String },
}

/// Template loading and rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read template file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to parse template: {0}")]
    Parse(String),

    #[error("Failed to render template: {0}")]
    Execution(String),
}

/// Specialized result type for schema operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
