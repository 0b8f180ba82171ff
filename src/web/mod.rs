//! Web layer - The HTTP presenter over the pipeline

pub mod render;
pub mod routes;
pub mod server;

pub use routes::{create_router, AppState};
