use crate::handlers::{self, AppState};
use crate::openapi;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Routes that sit behind the body limit (and, in the server, the rate limiter).
pub fn api_routes(max_body_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        // API Documentation
        .route("/docs", get(openapi::serve_swagger_ui))
        .route("/api-docs/openapi.json", get(openapi::serve_openapi_spec))
        // Assessment endpoints
        .route("/api/v1/questionnaire", get(handlers::get_questionnaire))
        .route("/api/v1/assessments", post(handlers::create_assessment))
        .route("/api/v1/assessments/:id", get(handlers::get_assessment))
        .route("/api/v1/allocations", get(handlers::preview_allocation))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
}

/// Adds the health check, state, tracing and CORS around `protected`.
pub fn with_common_layers(protected: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Full router without rate limiting.
pub fn build_router(state: Arc<AppState>) -> Router {
    let protected = api_routes(state.config.max_body_bytes);
    with_common_layers(protected, state)
}
