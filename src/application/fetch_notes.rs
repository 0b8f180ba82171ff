//! Fetch notes use case

use crate::domain::Note;
use crate::error::Result;
use crate::infrastructure::paths::CONFIG_CANDIDATES;
use crate::infrastructure::{config, store};
use std::path::Path;

/// Run the full pipeline against the standard candidate paths.
pub fn try_fetch_notes() -> Result<Vec<Note>> {
    try_fetch_notes_from(&CONFIG_CANDIDATES)
}

/// Run the full pipeline against an explicit candidate list: locate the
/// config, extract the data directory, load the store. Every invocation
/// starts from scratch; nothing is cached between calls.
pub fn try_fetch_notes_from<S: AsRef<str>>(candidates: &[S]) -> Result<Vec<Note>> {
    let config_path = config::locate(candidates)?;
    let data_dir = config::load_data_dir(&config_path)?;
    store::load_notes(Path::new(&data_dir))
}

/// Fail-soft form of [`try_fetch_notes`].
pub fn fetch_notes() -> Vec<Note> {
    fetch_notes_from(&CONFIG_CANDIDATES)
}

/// Fail-soft form of [`try_fetch_notes_from`]. The viewer shows an empty
/// table rather than an error page, so any pipeline failure is logged here
/// and replaced by an empty sequence; callers never see a pipeline error.
pub fn fetch_notes_from<S: AsRef<str>>(candidates: &[S]) -> Vec<Note> {
    match try_fetch_notes_from(candidates) {
        Ok(notes) => notes,
        Err(err) => {
            tracing::warn!(error = %err, "notes unavailable, rendering empty view");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NtviewError;
    use crate::infrastructure::NOTES_FILENAME;
    use std::fs;
    use tempfile::TempDir;

    /// Lay out a data directory with the given store contents plus a config
    /// pointing at it; returns the config path as a candidate string.
    fn write_fixture(temp: &TempDir, notes_json: &str) -> String {
        let data_dir = temp.path().join("data");
        fs::create_dir(&data_dir).unwrap();
        fs::write(data_dir.join(NOTES_FILENAME), notes_json).unwrap();

        let config_path = temp.path().join("config.yaml");
        fs::write(
            &config_path,
            format!("datafilepath: {}\n", data_dir.display()),
        )
        .unwrap();
        config_path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_pipeline_happy_path() {
        let temp = TempDir::new().unwrap();
        let candidate = write_fixture(
            &temp,
            r#"[{"ID": 5, "CreatedAt": "2025-01-01T00:00:00Z", "UpdatedAt": "2025-01-02T00:00:00Z", "DeletedAt": null, "Content": "hello", "Highlight": true, "Private": false, "Frequency": 1}]"#,
        );

        let notes = try_fetch_notes_from(&[candidate.clone()]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, 5);
        assert_eq!(notes[0].content, "hello");

        assert_eq!(fetch_notes_from(&[candidate]), notes);
    }

    #[test]
    fn test_pipeline_propagates_stage_errors() {
        let temp = TempDir::new().unwrap();
        // Config resolves but the data directory has no store.
        let config_path = temp.path().join("config.yaml");
        fs::write(
            &config_path,
            format!("datafilepath: {}\n", temp.path().join("empty").display()),
        )
        .unwrap();

        let err = try_fetch_notes_from(&[config_path.to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, NtviewError::DataFileNotFound(_)));
    }

    #[test]
    fn test_fail_soft_returns_empty_on_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nowhere.yaml");

        let candidates = [missing.to_str().unwrap()];
        assert!(matches!(
            try_fetch_notes_from(&candidates).unwrap_err(),
            NtviewError::ConfigNotFound
        ));
        assert!(fetch_notes_from(&candidates).is_empty());
    }
}
