//! Default locations and existence checks for input files.

use camino::{Utf8Path, Utf8PathBuf};

use crate::CliError;

/// Catalogue directory used when `--data-dir` is not given.
pub(crate) const DEFAULT_DATA_DIR: &str = "data";
/// File name of the participant counter inside the data directory.
pub(crate) const COUNTER_FILE: &str = "anju_participants";

pub(crate) fn data_dir_or_default(data_dir: Option<Utf8PathBuf>) -> Utf8PathBuf {
    data_dir.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR))
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match anju_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
