//! ntview - Read-only web viewer for ntkpr notes
//!
//! Locates the ntkpr config file by platform convention, resolves the data
//! directory it names, loads the exported notes store and serves a one-page
//! summary table over HTTP. The viewer never writes; a failed pipeline run
//! renders as an empty table, not an error.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod web;

pub use error::NtviewError;
