//! Infrastructure layer - Filesystem access and platform path conventions

pub mod config;
pub mod paths;
pub mod store;

pub use paths::CONFIG_CANDIDATES;
pub use store::NOTES_FILENAME;
