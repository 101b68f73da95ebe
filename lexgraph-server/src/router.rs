//! Router construction for the lexgraph server.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
///
/// When `static_dir` is given, unmatched paths are served from it.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/search/:term", get(handlers::search::search))
        .route("/lang/:iso", get(handlers::language::language_info))
        .route(
            "/relation/:iso1/:iso2",
            get(handlers::language::language_pair_info),
        )
        .route("/word/:word", get(handlers::word::word_info))
        .route("/word/:word/:lang", get(handlers::word::word_in_language))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
