//! Deployment manifest handling.
//! The manifest is a small JSON or YAML file describing one deployment
//! target; parsing produces a validated [`Configuration`].

use crate::config::Configuration;
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// Reads the manifest file contents.
///
/// # Errors
/// * `Error::ManifestDoesNotExistError` if the file does not exist
pub fn load_manifest<P: AsRef<Path>>(manifest_path: P) -> Result<String> {
    let manifest_path = manifest_path.as_ref();
    if !manifest_path.exists() {
        return Err(Error::ManifestDoesNotExistError {
            manifest: manifest_path.display().to_string(),
        });
    }

    debug!("Loading manifest from {}", manifest_path.display());
    std::fs::read_to_string(manifest_path).map_err(Error::IoError)
}

/// Parses manifest content into a configuration.
///
/// Tries JSON first, then YAML, matching the two supported manifest
/// formats.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid
///   YAML, or if the described configuration is invalid
pub fn parse_manifest(content: &str) -> Result<Configuration> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("invalid manifest: {}", e))),
    }
}
