//! Claims handlers

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Extension, Json,
};
use core_kernel::{DocumentId, RequestId};
use domain_claims::ExtractedClaim;
use serde_json::Value;
use tracing::info;

use crate::{AppState, error::ApiError};
use crate::dto::claims::ProcessClaimResponse;

/// Multipart field holding the document
pub const FILE_FIELD: &str = "file";

struct Upload {
    file_name: String,
    bytes: Bytes,
}

/// Extracts, validates and routes an uploaded FNOL document
pub async fn process_claim(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Result<Json<ProcessClaimResponse>, ApiError> {
    let upload = read_upload(&mut multipart).await?;
    let document_id = DocumentId::new();

    info!(
        %request_id,
        %document_id,
        file_name = %upload.file_name,
        size = upload.bytes.len(),
        "Claim document received"
    );

    let extracted = state
        .extractor
        .extract_document(&upload.file_name, &upload.bytes)
        .await?;

    let response = ProcessClaimResponse::route(extracted);
    log_decision(&request_id, &response);

    Ok(Json(response))
}

/// Validates and routes an already-extracted field mapping
pub async fn route_claim(
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> Result<Json<ProcessClaimResponse>, ApiError> {
    if !body.is_object() {
        return Err(ApiError::BadRequest(
            "Expected a JSON object of extracted fields".to_string(),
        ));
    }

    let response = ProcessClaimResponse::route(ExtractedClaim::from_value(body));
    log_decision(&request_id, &response);

    Ok(Json(response))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Upload { file_name, bytes });
    }

    Err(ApiError::BadRequest(format!(
        "Missing multipart field '{}'",
        FILE_FIELD
    )))
}

fn log_decision(request_id: &RequestId, response: &ProcessClaimResponse) {
    info!(
        %request_id,
        route = %response.routing.route,
        missing = response.routing.missing.len(),
        reason = %response.routing.reason,
        "Claim routed"
    );
}
