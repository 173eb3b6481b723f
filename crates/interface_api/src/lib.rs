//! HTTP API Layer
//!
//! REST API for FNOL claim processing using Axum.
//!
//! # Routes
//!
//! - `POST /process-claim/`: multipart upload (field `file`), extracted,
//!   validated and routed
//! - `POST /api/v1/claims/route`: routes an already-extracted field mapping
//! - `GET /health`, `GET /health/ready`
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(&config, Arc::new(client));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
    middleware as axum_middleware,
};
use infra_extraction::{FieldExtractor, LlmClient};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: FieldExtractor,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
/// * `client` - Model client used for field extraction
pub fn create_router(config: &ApiConfig, client: Arc<dyn LlmClient>) -> Router {
    let state = AppState {
        extractor: FieldExtractor::new(client),
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/process-claim/", post(claims::process_claim))
        .nest(
            "/api/v1/claims",
            Router::new().route("/route", post(claims::route_claim)),
        )
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .merge(claims_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .map_response(|res: axum::response::Response<_>| res.map(axum::body::Body::new))
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(config.max_upload_bytes)),
        )
        .with_state(state)
}
