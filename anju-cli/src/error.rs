//! Error types emitted by the Anju CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use anju_core::SessionError;
use anju_data::CatalogError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Anju CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A catalogue or answer file could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The quiz could not be driven, e.g. because it has no questions.
    #[error("quiz session failed: {0}")]
    Session(#[from] SessionError),
    /// Persisting the participant counter failed.
    #[error("failed to update participant counter at {path:?}: {source}")]
    WriteCounter {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Serializing the quiz outcome failed.
    #[error("failed to serialize quiz outcome: {0}")]
    SerializeOutcome(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

