//! Error types for Yamdown operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Yamdown crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading and normalizing documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    IoWithPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The YAML front-matter block could not be parsed.
    #[error("Frontmatter error: {0}")]
    Yaml(#[from] yaml_serde::Error),

    /// The front-matter parsed but has an unusable shape.
    #[error("Frontmatter error: {0}")]
    Frontmatter(String),

    /// A date string matched none of the accepted formats.
    #[error("unrecognized date format: {input:?}")]
    DateFormat { input: String },

    /// A metadata value has the wrong shape for its field.
    #[error("Invalid metadata for '{field}': {message}")]
    InvalidMetadata { field: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error that remembers the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a front-matter shape error.
    pub fn frontmatter(msg: impl Into<String>) -> Self {
        Self::Frontmatter(msg.into())
    }

    /// Create a date format error.
    pub fn date_format(input: impl Into<String>) -> Self {
        Self::DateFormat {
            input: input.into(),
        }
    }

    /// Create an invalid metadata error for `field`.
    pub fn invalid_metadata(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true for I/O failures, with or without a path.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::IoWithPath { .. })
    }

    /// Returns true for front-matter parse and shape failures.
    pub fn is_frontmatter(&self) -> bool {
        matches!(self, Self::Yaml(_) | Self::Frontmatter(_))
    }

    /// Returns true for date format failures.
    pub fn is_date_format(&self) -> bool {
        matches!(self, Self::DateFormat { .. })
    }

    /// Returns true for metadata shape failures.
    pub fn is_invalid_metadata(&self) -> bool {
        matches!(self, Self::InvalidMetadata { .. })
    }
}

/// Result type alias using Yamdown's Error type.
pub type Result<T> = std::result::Result<T, Error>;
