//! Certificate issuance handler

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::error::ApiError;

use super::AppState;

/// Response from certificate issuance
#[derive(Debug, Serialize)]
pub struct IssueCertificateResponse {
    /// The new certificate's public identifier
    pub identifier: String,
    /// URL-shaped reference for QR codes, links and documents
    pub verification_reference: String,
}

/// Issue a certificate from an untrusted payload
///
/// POST /v1/certificates
///
/// The body is an arbitrary JSON object of credential fields. Field
/// validation (shape and required fields) happens in the issuance
/// service; this handler only insists the body is an object.
pub async fn issue_certificate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<IssueCertificateResponse>, ApiError> {
    let serde_json::Value::Object(payload) = body else {
        return Err(ApiError::BadRequest("request body must be a JSON object".into()));
    };

    let issued = state.issuance.issue(payload).await?;

    Ok(Json(IssueCertificateResponse {
        identifier: issued.id.to_string(),
        verification_reference: issued.verification_reference,
    }))
}
