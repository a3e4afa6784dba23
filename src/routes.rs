//! Router construction and cross-cutting middleware
//!
//! Builds the HTTP surface: the activity API, the static signup site mount,
//! a health check, and per-request tracing middleware.

use crate::api;
use crate::state::AppState;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::{Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    message: String,
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// GET / - Send visitors to the signup site
async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
    })
}

/// Build the application router with all routes and middleware
///
/// `static_dir` is the directory served under `/static`. The shared state is
/// injected rather than global, so tests can build isolated instances.
pub fn create_router(state: Arc<RwLock<AppState>>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/api/health", get(health_check))
        .route("/activities", get(api::activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(api::activities::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(api::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        // Middleware (order matters - request_id should be first)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
