//! Core schema types
//!
//! This module defines the data structures that represent an argument schema
//! file, plus the typed values produced by coercing declared defaults.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt;

/// Top-level schema structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Schema {
    /// Declared arguments, in declaration order
    #[serde(rename = "Arguments", default)]
    pub arguments: Vec<ArgumentDef>,
}

/// A single argument definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArgumentDef {
    /// Flag name (long form)
    pub long: String,

    /// Declared value type
    #[serde(rename = "dataType")]
    pub data_type: DataType,

    /// Help text, handed to the parser verbatim
    #[serde(default)]
    pub help: String,

    /// Declared default, kept raw until coerced against `data_type`
    #[serde(rename = "defaultValue", default)]
    pub default_value: Value,
}

/// The closed set of supported argument types
///
/// An unrecognized `dataType` tag in the schema fails deserialization, so a
/// typo like `float` surfaces as a schema error instead of a silently
/// missing flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Int,
    Bool,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::String => "string",
            DataType::Int => "int",
            DataType::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A typed argument value
///
/// Templates only ever see the string form, produced through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl DataType {
    /// Coerce a raw schema scalar into a value of this type.
    ///
    /// Returns a human-readable reason on failure; the caller attaches the
    /// argument name.
    pub fn coerce(self, raw: &Value) -> std::result::Result<ArgValue, String> {
        match self {
            DataType::String => Ok(ArgValue::Str(scalar_text(raw).unwrap_or_default())),
            DataType::Int => {
                let text =
                    scalar_text(raw).ok_or_else(|| "missing default value".to_string())?;
                text.parse::<i64>()
                    .map(ArgValue::Int)
                    .map_err(|e| format!("invalid integer literal '{}': {}", text, e))
            }
            DataType::Bool => match raw {
                Value::Bool(b) => Ok(ArgValue::Bool(*b)),
                _ => {
                    let text =
                        scalar_text(raw).ok_or_else(|| "missing default value".to_string())?;
                    parse_bool_literal(&text)
                        .map(ArgValue::Bool)
                        .ok_or_else(|| format!("invalid boolean literal '{}'", text))
                }
            },
        }
    }
}

/// Render a YAML scalar as text; sequences, mappings and null are rejected.
fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn parse_bool_literal(s: &str) -> Option<bool> {
    match s {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
