//! Persistent participant counter.
//!
//! The count is stored as decimal text. A missing or unreadable file counts
//! as zero so a corrupted counter never blocks a quiz.

use camino::Utf8PathBuf;
use log::warn;

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisitCounter {
    path: Utf8PathBuf,
}

impl VisitCounter {
    pub(crate) fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Number of completed quizzes recorded so far.
    pub(crate) fn current(&self) -> u64 {
        match anju_fs::read_to_string(&self.path) {
            Ok(text) => text.trim().parse().unwrap_or_else(|_| {
                warn!("participant counter at {} is not a number", self.path);
                0
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => 0,
            Err(err) => {
                warn!("failed to read participant counter at {}: {err}", self.path);
                0
            }
        }
    }

    /// Record one more completed quiz and return the new total.
    pub(crate) fn increment(&self) -> Result<u64, CliError> {
        let next = self.current().saturating_add(1);
        anju_fs::write_file(&self.path, next.to_string().as_bytes()).map_err(|source| {
            CliError::WriteCounter {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(next)
    }
}
