//! Notes store access

use crate::domain::Note;
use crate::error::{NtviewError, Result};
use std::fs;
use std::path::Path;

/// Fixed name of the ntkpr export inside the data directory.
pub const NOTES_FILENAME: &str = "notes.json";

/// Load every note from the store under `data_dir`.
///
/// Decoding is strict: one malformed element rejects the whole batch, so
/// callers always see either the complete sequence in file order or an
/// error. No filtering happens here; soft-deleted and private notes are
/// part of the export and stay in.
pub fn load_notes(data_dir: &Path) -> Result<Vec<Note>> {
    let path = data_dir.join(NOTES_FILENAME);
    if !path.exists() {
        return Err(NtviewError::DataFileNotFound(path));
    }

    let contents = fs::read_to_string(&path).map_err(|source| NtviewError::Read {
        path: path.clone(),
        source,
    })?;

    let notes: Vec<Note> = serde_json::from_str(&contents).map_err(|err| NtviewError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;

    tracing::debug!(path = %path.display(), count = notes.len(), "loaded notes");
    Ok(notes)
}
