//! Serialization module for writing extracted blueprints as YAML or JSON.
//!
//! Downstream generators read the blueprint list from a file, so the output is a plain
//! sequence of [`ServiceBlueprint`] records.

use crate::error::Error;
use crate::extractor::ServiceBlueprint;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes blueprints to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(blueprints: &[ServiceBlueprint]) -> Result<String> {
    debug!("Serializing {} blueprints to YAML", blueprints.len());
    let yaml = serde_yaml::to_string(blueprints).map_err(Error::from)?;
    Ok(yaml)
}

/// Serializes blueprints to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(blueprints: &[ServiceBlueprint]) -> Result<String> {
    debug!("Serializing {} blueprints to JSON", blueprints.len());
    let json = serde_json::to_string_pretty(blueprints).map_err(Error::from)?;
    Ok(json)
}

/// Writes string content to a file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
