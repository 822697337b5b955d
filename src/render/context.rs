//! Render context shaping
//!
//! Templates see exactly one structure: an ordered `Arguments` list of
//! name/value pairs, every value already in string form. Field names are
//! capitalized because they are part of the template-facing contract.

use serde::Serialize;

/// One named argument value, as exposed to templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentValue {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Value")]
    pub value: String,
}

impl ArgumentValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ArgumentValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The complete data structure handed to the template engine
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Argument values in schema declaration order
    #[serde(rename = "Arguments")]
    pub arguments: Vec<ArgumentValue>,
}

impl RenderContext {
    pub fn new(arguments: Vec<ArgumentValue>) -> Self {
        RenderContext { arguments }
    }
}
