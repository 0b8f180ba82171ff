//! HTML rendering for the notes page

use crate::domain::Note;
use crate::error::{NtviewError, Result};
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Length of the content preview column, in characters.
const PREVIEW_CHARS: usize = 50;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One table row, shaped for display.
#[derive(Debug, Serialize)]
pub struct NoteRow {
    pub id: u64,
    pub preview: String,
    pub created_at: String,
    pub updated_at: String,
    pub frequency: u32,
    pub highlighted: String,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        NoteRow {
            id: note.id,
            preview: preview(&note.content),
            created_at: note.created_at.format(TIME_FORMAT).to_string(),
            updated_at: note.updated_at.format(TIME_FORMAT).to_string(),
            frequency: note.frequency,
            highlighted: if note.highlight {
                "H".to_string()
            } else {
                String::new()
            },
        }
    }
}

/// First `PREVIEW_CHARS` characters of the content, with an ellipsis only
/// when something was cut. Counted in characters so multibyte content is
/// never split mid-glyph.
fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Build the template set. The page template is compiled into the binary,
/// so failure here means the template itself is broken.
pub fn build_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", INDEX_TEMPLATE)
        .map_err(|err| NtviewError::Template(err.to_string()))?;
    Ok(tera)
}

/// Render the notes page. Rows keep store order; an empty slice renders
/// the empty state instead of the table. Note content is untrusted and
/// goes through the engine's HTML escaping.
pub fn render_index(tera: &Tera, notes: &[Note]) -> Result<String> {
    let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from).collect();
    let mut context = Context::new();
    context.insert("notes", &rows);

    tera.render("index.html", &context)
        .map_err(|err| NtviewError::Template(err.to_string()))
}
