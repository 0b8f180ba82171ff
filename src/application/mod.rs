//! Application layer - Use cases and orchestration

pub mod fetch_notes;

pub use fetch_notes::{fetch_notes, fetch_notes_from, try_fetch_notes, try_fetch_notes_from};
