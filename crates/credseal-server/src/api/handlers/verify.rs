//! Certificate verification handler

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use credseal_core::Decision;

use crate::api::error::ApiError;
use crate::service::VerificationOutcome;

use super::AppState;

/// Response from certificate verification
///
/// Payload field values are returned as JSON only; escaping them for
/// markup is the rendering collaborator's obligation.
#[derive(Debug, Serialize)]
pub struct VerifyCertificateResponse {
    /// VALID, INVALID or REVOKED
    pub decision: Decision,
    /// The stored credential content
    pub payload: serde_json::Map<String, serde_json::Value>,
    /// When the certificate was issued
    pub issued_at: DateTime<Utc>,
}

/// Verify a certificate by identifier
///
/// GET /v1/certificates/{id}
///
/// The identifier arrives from a URL path segment or a scanned code and
/// is untrusted; unknown or malformed identifiers yield 404 NOT_FOUND,
/// which is distinct from a 200 INVALID decision.
pub async fn verify_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<VerifyCertificateResponse>, ApiError> {
    match state.verification.verify_by_identifier(&id).await? {
        VerificationOutcome::NotFound => {
            Err(ApiError::NotFound(format!("no certificate under identifier '{}'", id)))
        }
        VerificationOutcome::Decided {
            decision,
            payload,
            issued_at,
        } => Ok(Json(VerifyCertificateResponse {
            decision,
            payload: payload.to_json(),
            issued_at,
        })),
    }
}
