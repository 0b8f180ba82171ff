//! Config discovery and data directory extraction

use crate::error::{NtviewError, Result};
use crate::infrastructure::paths;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted spellings for the data directory entry, checked in order.
/// Both occur in real ntkpr config files.
const DATA_DIR_KEYS: [&str; 2] = ["datafilepath", "DataFilePath"];

/// Probe `candidates` in order and return the first expanded path that
/// exists on disk.
///
/// A candidate that fails expansion is skipped, not fatal; priority is
/// decided by list order alone.
pub fn locate<S: AsRef<str>>(candidates: &[S]) -> Result<PathBuf> {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        match paths::expand(candidate) {
            Ok(path) => {
                if path.exists() {
                    tracing::debug!(path = %path.display(), "found config");
                    return Ok(path);
                }
                tracing::debug!(path = %path.display(), "no config at candidate");
            }
            Err(err) => {
                tracing::debug!(candidate = %candidate, error = %err, "skipping candidate");
            }
        }
    }

    Err(NtviewError::ConfigNotFound)
}

/// Read the config at `path` and extract the data directory it names.
///
/// The file is YAML but read as a loose mapping rather than a typed
/// struct; the first key in `DATA_DIR_KEYS` holding a non-empty string
/// wins. The value is returned verbatim, with no normalization and no
/// existence check. Whether the directory is usable shows up when the
/// notes store inside it is probed.
pub fn load_data_dir(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| NtviewError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read config");

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&contents).map_err(|err| NtviewError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    for key in DATA_DIR_KEYS {
        if let Some(value) = doc.get(key).and_then(serde_yaml::Value::as_str) {
            if !value.is_empty() {
                tracing::debug!(key = %key, data_dir = %value, "resolved data directory");
                return Ok(value.to_string());
            }
        }
    }

    Err(NtviewError::MissingField(path.to_path_buf()))
}
