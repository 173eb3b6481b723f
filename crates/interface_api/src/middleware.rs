//! API middleware

use axum::{
    body::Body,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use core_kernel::RequestId;
use tracing::info;

/// Response header carrying the request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Audit logging middleware
///
/// Tags every request with a [`RequestId`], available to handlers as a
/// request extension and echoed in the `x-request-id` response header.
pub async fn audit_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id);

    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();

    let mut response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
