//! Error types for texture generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while generating a texture
#[derive(Debug, Error)]
pub enum TextureError {
    /// The destination could not be opened for writing
    #[error("unable to open {} for output: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened sink failed
    #[error("failed to write texture: {0}")]
    Write(#[from] io::Error),

    /// The configuration file could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TextureError {
    /// Create an output-unavailable error for `path`
    pub fn output_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Path of the output that failed to open, if this is an open failure
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::OutputUnavailable { path, .. } => Some(path),
            _ => None,
        }
    }
}
