pub mod control;
pub mod state;

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;
use crate::http::state::AppState;

/// `/status` is the only explicit route. Everything else, whatever the method,
/// falls through to the show handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", any(control::status))
        .fallback(control::show)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
