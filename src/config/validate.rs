//! Schema validation
//!
//! Registry invariants checked before any flag is registered.

use crate::config::types::Schema;
use crate::error::{ConfigError, ConfigResult};
use std::collections::HashSet;

/// Validate a parsed schema
pub fn validate_schema(schema: &Schema) -> ConfigResult<()> {
    let mut seen = HashSet::new();

    for def in &schema.arguments {
        if def.long.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !seen.insert(def.long.as_str()) {
            return Err(ConfigError::DuplicateName(def.long.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_schema;

    #[test]
    fn test_validate_valid_schema() {
        let schema = parse_schema(
            r#"
Arguments:
  - long: type
    dataType: string
    help: Commit type
    defaultValue: chore
  - long: count
    dataType: int
    help: Number of changes
    defaultValue: 5
"#,
        )
        .unwrap();

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn test_validate_duplicate_name() {
        let schema = parse_schema(
            r#"
Arguments:
  - long: type
    dataType: string
    help: Declared once
    defaultValue: a
  - long: type
    dataType: int
    help: Declared twice
    defaultValue: 1
"#,
        )
        .unwrap();

        let result = validate_schema(&schema);
        assert!(matches!(result, Err(ConfigError::DuplicateName(name)) if name == "type"));
    }

    #[test]
    fn test_validate_empty_name() {
        let schema = parse_schema(
            r#"
Arguments:
  - long: ""
    dataType: string
    help: Nameless
    defaultValue: x
"#,
        )
        .unwrap();

        assert!(matches!(validate_schema(&schema), Err(ConfigError::EmptyName)));
    }

    #[test]
    fn test_validate_empty_schema() {
        let schema = parse_schema("Arguments: []").unwrap();
        assert!(validate_schema(&schema).is_ok());
    }
}
