//! Error types raised while loading catalogues.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading a catalogue or answer file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Opening the file failed.
    #[error("failed to open {kind} at {path}: {source}")]
    Open {
        /// Which catalogue was being read.
        kind: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The file was not a JSON array of row objects.
    #[error("failed to parse {kind} at {path}: {source}")]
    Parse {
        /// Which catalogue was being read.
        kind: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Path of the file that could not be loaded.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Open { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
