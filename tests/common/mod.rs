use ntview::infrastructure::NOTES_FILENAME;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small export the way ntkpr writes it: file order differs from id
/// order, and it contains a highlighted, a soft-deleted and a private note.
pub fn sample_notes() -> &'static str {
    r#"[
        {"ID": 3, "CreatedAt": "2025-01-17T10:30:00Z", "UpdatedAt": "2025-02-01T08:15:30Z", "DeletedAt": null, "Content": "first in file, highlighted, and long enough that the preview column must cut it off somewhere", "Highlight": true, "Private": false, "Frequency": 5},
        {"ID": 1, "CreatedAt": "2024-11-05T09:00:00Z", "UpdatedAt": "2024-12-24T18:00:00Z", "DeletedAt": "2025-01-02T00:00:00Z", "Content": "soft-deleted but still exported", "Highlight": false, "Private": false, "Frequency": 0},
        {"ID": 2, "CreatedAt": "2025-01-10T00:00:00Z", "UpdatedAt": "2025-01-11T07:45:00Z", "DeletedAt": null, "Content": "private note", "Highlight": false, "Private": true, "Frequency": 12}
    ]"#
}

/// Lay out `<temp>/data/notes.json` with the given contents plus a config
/// file pointing at the data directory. Returns the config path as a
/// candidate string, and the data directory for later rewrites.
pub fn write_store(temp: &TempDir, notes_json: &str) -> (String, PathBuf) {
    let data_dir = temp.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    fs::write(data_dir.join(NOTES_FILENAME), notes_json).unwrap();

    let candidate = write_config(temp, &format!("datafilepath: {}\n", data_dir.display()));
    (candidate, data_dir)
}

/// Write a config file with the given contents; returns its path as a
/// candidate string.
pub fn write_config(temp: &TempDir, contents: &str) -> String {
    let path = temp.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}
