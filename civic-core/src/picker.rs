//! File picker: turns filesystem paths into attachments.
//!
//! Size limits live here, not in the wizard: the wizard accepts whatever
//! the picker hands it.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::Attachment;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("{path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("{path} is {size} bytes (limit {limit})")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

/// Read one file. The attachment is named after the file name.
pub fn load_attachment(path: &Path, max_bytes: u64) -> Result<Attachment, PickerError> {
    let meta = std::fs::metadata(path).map_err(|source| PickerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(PickerError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if meta.len() > max_bytes {
        return Err(PickerError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            limit: max_bytes,
        });
    }
    let payload = std::fs::read(path).map_err(|source| PickerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(%name, size = payload.len(), "attachment loaded");
    Ok(Attachment::new(name, payload))
}

/// Read every path, stopping at the first failure so nothing is half-added.
pub fn load_attachments<P: AsRef<Path>>(
    paths: &[P],
    max_bytes: u64,
) -> Result<Vec<Attachment>, PickerError> {
    paths
        .iter()
        .map(|p| load_attachment(p.as_ref(), max_bytes))
        .collect()
}
