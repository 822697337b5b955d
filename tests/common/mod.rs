//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a schema and template pair into a temporary directory
pub fn write_fixtures(schema: &str, template: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    let template_path = temp_dir.path().join("output.tmpl");

    fs::write(&config_path, schema).unwrap();
    fs::write(&template_path, template).unwrap();

    (temp_dir, config_path, template_path)
}
