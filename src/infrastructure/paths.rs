//! Candidate path expansion

use crate::error::{NtviewError, Result};
use std::path::PathBuf;

/// Placeholder understood in candidate paths, Windows convention.
const APPDATA_TOKEN: &str = "%APPDATA%";

/// Candidate locations for the ntkpr config file, in priority order:
/// macOS application support, then XDG, then Windows roaming AppData.
/// Every candidate is probed on every host; a foreign-platform path
/// simply fails the existence check in the locator.
pub const CONFIG_CANDIDATES: [&str; 3] = [
    "~/Library/Application Support/ntkpr/config.yaml",
    "~/.config/ntkpr/config.yaml",
    "%APPDATA%\\ntkpr\\config.yaml",
];

/// Expand a candidate path template into a concrete path.
///
/// Substitutes every `%APPDATA%` occurrence with the environment variable
/// of the same name, then resolves a leading `~` to the home directory.
/// Pure string and environment work; the filesystem is never touched and
/// separators are left exactly as written.
pub fn expand(path: &str) -> Result<PathBuf> {
    let mut expanded = path.to_string();

    if expanded.contains(APPDATA_TOKEN) {
        let value = std::env::var("APPDATA")
            .map_err(|_| NtviewError::EnvVarMissing("APPDATA".to_string()))?;
        expanded = expanded.replace(APPDATA_TOKEN, &value);
    }

    if let Some(rest) = expanded.strip_prefix('~') {
        let home =
            dirs::home_dir().ok_or_else(|| NtviewError::EnvVarMissing("HOME".to_string()))?;
        let rest = rest.trim_start_matches('/');
        return Ok(if rest.is_empty() { home } else { home.join(rest) });
    }

    Ok(PathBuf::from(expanded))
}
