use std::sync::Arc;
use crate::remote::Remote;

/// Shared application state injected into all route handlers via axum::extract::State.
/// Arc provides cheap clone; the Remote owns the only mutable state (its update lock).
#[derive(Clone)]
pub struct AppState {
    pub remote: Arc<Remote>,
}
