//! Error handling for the Nimbus application.
//! Defines the crate-wide error type and result alias used throughout.

use std::io;
use thiserror::Error;

/// Custom error types for Nimbus operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents an invalid or inconsistent deployment configuration,
    /// detected before any template is selected or rendered
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The manifest file passed on the command line does not exist
    #[error("Manifest file '{manifest}' does not exist")]
    ManifestDoesNotExistError { manifest: String },

    /// The selector produced an identifier with no catalog entry.
    /// This is a selector/catalog mismatch, not a user input problem.
    #[error("Template '{identifier}' does not exist in the catalog")]
    TemplateNotFoundError { identifier: String },

    /// Template evaluation failed for a specific catalog entry
    #[error("Failed to render template '{identifier}': {reason}")]
    RenderError { identifier: String, reason: String },

    /// Raw engine error, wrapped into `RenderError` by the generator
    #[error(transparent)]
    MinijinjaError(#[from] minijinja::Error),

    /// The output directory already exists and `--force` was not given
    #[error("Output directory '{output_dir}' already exists. Use --force to overwrite it")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
