//! Route definitions for the viewer

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tera::Tera;
use tower_http::trace::TraceLayer;

use crate::application;
use crate::web::render;

/// Immutable state shared by handlers: the compiled template set and the
/// candidate list the pipeline probes. Every request runs the pipeline
/// from scratch against this list; nothing else is shared.
pub struct AppState {
    pub tera: Tera,
    pub candidates: Vec<String>,
}

/// Creates the axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /` - the notes table, rebuilt from disk on every request.
async fn index(State(state): State<Arc<AppState>>) -> Response {
    let notes = application::fetch_notes_from(&state.candidates);
    tracing::debug!(count = notes.len(), "rendering notes page");

    match render::render_index(&state.tera, &notes) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render notes page");
            (StatusCode::INTERNAL_SERVER_ERROR, "template error").into_response()
        }
    }
}

/// `GET /health` - liveness probe.
async fn health() -> &'static str {
    "ok"
}
