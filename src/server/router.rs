use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the router: the run API, a health check, and static files for
/// everything else.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/api/run", get(handlers::run))
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
