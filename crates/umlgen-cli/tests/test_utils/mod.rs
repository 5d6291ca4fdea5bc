//! Test utilities for umlgen integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// The templates shipped at the workspace root
pub fn workspace_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../templates")
}

/// A command for the built `umlgen` binary
pub fn umlgen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_umlgen"));
    command.env("RUST_LOG", "warn");
    command
}

/// Writes a small shop model to `dir` and returns its path
pub fn create_test_model(dir: &Path) -> anyhow::Result<PathBuf> {
    let model_path = dir.join("shop.json");
    fs::write(&model_path, SHOP_MODEL)?;
    Ok(model_path)
}

/// Asserts that a directory contains all the expected files
pub fn assert_dir_contains_files(dir: &Path, expected_files: &[&str]) -> anyhow::Result<()> {
    let missing_files: Vec<String> = expected_files
        .iter()
        .map(|file| dir.join(file))
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();

    if !missing_files.is_empty() {
        return Err(anyhow::anyhow!(
            "Missing expected files in {}:\n  {}",
            dir.display(),
            missing_files.join("\n  ")
        ));
    }
    Ok(())
}

/// Asserts that a file contains every one of `contents`
pub fn assert_file_contains<P: AsRef<Path>>(path: P, contents: &[&str]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let missing_contents: Vec<&str> = contents
        .iter()
        .copied()
        .filter(|expected| !file_content.contains(expected))
        .collect();

    if !missing_contents.is_empty() {
        return Err(anyhow::anyhow!(
            "File {} is missing expected content:\n  {}",
            path.display(),
            missing_contents.join("\n  ")
        ));
    }
    Ok(())
}

const SHOP_MODEL: &str = r#"{
  "$type": "Model",
  "name": "Shop",
  "packagedElement": [
    {
      "$type": "Class",
      "id": "order",
      "name": "Order",
      "visibility": "public",
      "interfaceRealization": [{ "contract": { "$ref": "payable" } }],
      "ownedAttribute": [
        { "name": "customer", "visibility": "private", "type": { "$ref": "customer" } },
        { "name": "status", "visibility": "private", "type": { "$ref": "status" } }
      ]
    },
    { "$type": "Class", "id": "customer", "name": "Customer", "visibility": "public" },
    {
      "$type": "Interface",
      "id": "payable",
      "name": "Payable",
      "visibility": "public",
      "ownedOperation": [{ "name": "pay" }]
    },
    {
      "$type": "Enumeration",
      "id": "status",
      "name": "Status",
      "visibility": "public",
      "ownedLiteral": [{ "name": "OPEN" }, { "name": "PAID" }]
    },
    { "$type": "PrimitiveType", "id": "string", "name": "String" }
  ]
}"#;
