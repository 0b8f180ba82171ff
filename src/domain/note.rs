//! Note wire model for the ntkpr export format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note as ntkpr exports it to `notes.json`.
///
/// Member names mirror the export byte-for-byte. The viewer decodes without
/// transformation and ignores members it does not know, so it keeps working
/// when ntkpr grows its record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Note {
    #[serde(rename = "ID")]
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Null (or absent) until the note is soft-deleted in ntkpr.
    pub deleted_at: Option<DateTime<Utc>>,
    pub content: String,
    pub highlight: bool,
    pub private: bool,
    pub frequency: u32,
}
