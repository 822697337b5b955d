//! Schema file reading and parsing

use crate::config::types::Schema;
use crate::error::{ConfigError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a schema file from a path
pub fn parse_schema_file(path: &Path) -> Result<Schema> {
    debug!(path = %path.display(), "reading argument schema");

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_schema(&contents)
}

/// Parse a schema from a string
pub fn parse_schema(yaml: &str) -> Result<Schema> {
    let schema: Schema = serde_yaml::from_str(yaml)?;
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DataType;
    use crate::error::ArgformError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_schema() {
        let yaml = r#"
Arguments:
  - long: type
    dataType: string
    help: Commit type
    defaultValue: chore
"#;
        let schema = parse_schema(yaml).unwrap();
        assert_eq!(schema.arguments.len(), 1);
        assert_eq!(schema.arguments[0].long, "type");
        assert_eq!(schema.arguments[0].data_type, DataType::String);
    }

    #[test]
    fn test_parse_preserves_declaration_order() {
        let yaml = r#"
Arguments:
  - long: zebra
    dataType: string
    help: Comes first anyway
    defaultValue: z
  - long: alpha
    dataType: int
    help: Comes second anyway
    defaultValue: 1
"#;
        let schema = parse_schema(yaml).unwrap();
        let names: Vec<&str> = schema.arguments.iter().map(|d| d.long.as_str()).collect();
        assert_eq!(names, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_parse_empty_schema() {
        let schema = parse_schema("Arguments: []").unwrap();
        assert!(schema.arguments.is_empty());
    }

    #[test]
    fn test_parse_unsupported_data_type_is_an_error() {
        let yaml = r#"
Arguments:
  - long: ratio
    dataType: float
    help: Not a supported type
    defaultValue: 0.5
"#;
        let result = parse_schema(yaml);
        assert!(matches!(result, Err(ArgformError::Yaml(_))));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let result = parse_schema("Arguments: [not: closed");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
Arguments:
  - long: verbose
    dataType: bool
    help: Verbose output
    defaultValue: false
"#,
        )
        .unwrap();

        let schema = parse_schema_file(&path).unwrap();
        assert_eq!(schema.arguments.len(), 1);
    }

    #[test]
    fn test_parse_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = parse_schema_file(&temp_dir.path().join("nope.yaml"));
        assert!(matches!(
            result,
            Err(ArgformError::Config(ConfigError::Read { .. }))
        ));
    }
}
