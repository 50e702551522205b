//! Revocation administration handler
//!
//! Revocation is admin-only. The bearer-token check here is the
//! transport-side authentication; passing it is what mints the
//! `RevocationAuthority` the service layer requires.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::api::error::ApiError;
use crate::service::RevocationAuthority;

use super::AppState;

/// Request to revoke a certificate
#[derive(Debug, Deserialize)]
pub struct RevokeCertificateRequest {
    /// Reason recorded in the revocation audit trail
    pub reason: String,
    /// Admin identifier recorded as the revoking actor
    #[serde(default = "default_actor")]
    pub revoked_by: String,
}

fn default_actor() -> String {
    "admin".into()
}

/// Response from certificate revocation
#[derive(Debug, Serialize)]
pub struct RevokeCertificateResponse {
    pub identifier: String,
    pub status: String,
}

/// Revoke a certificate
///
/// POST /v1/certificates/{id}/revoke
///
/// Requires `Authorization: Bearer <admin token>`. Idempotent: revoking
/// an already-revoked certificate succeeds without altering the
/// original audit record.
pub async fn revoke_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<RevokeCertificateRequest>,
) -> Result<Json<RevokeCertificateResponse>, ApiError> {
    let authority = authorize(&state, &headers, &request.revoked_by)?;

    state.revocation.revoke(&authority, &id, request.reason).await?;

    Ok(Json(RevokeCertificateResponse {
        identifier: id,
        status: "REVOKED".into(),
    }))
}

fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    actor: &str,
) -> Result<RevocationAuthority, ApiError> {
    let Some(expected) = state.admin_token.as_deref() else {
        warn!("Revocation attempted but no admin token is configured");
        return Err(ApiError::Unauthorized(
            "revocation administration is not enabled".into(),
        ));
    };

    let presented = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected => Ok(RevocationAuthority::new(actor)),
        _ => Err(ApiError::Unauthorized("admin token required".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{
        IssuanceService, RevocationService, ServiceConfig, VerificationService,
    };
    use crate::storage::MemoryStore;
    use credseal_core::{IssuerKey, Sealer};

    fn state(admin_token: Option<&str>) -> AppState {
        let sealer = Arc::new(Sealer::Ed25519(IssuerKey::generate("test-issuer")));
        let store = Arc::new(MemoryStore::new());
        AppState {
            issuance: IssuanceService::new(
                sealer.clone(),
                store.clone(),
                ServiceConfig {
                    public_base_url: "http://localhost:8080".into(),
                },
            ),
            verification: VerificationService::new(sealer.clone(), store.clone()),
            revocation: RevocationService::new(store.clone()),
            sealer,
            store,
            admin_token: admin_token.map(String::from),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", format!("Bearer {}", token).parse().unwrap());
        headers
    }

    #[test]
    fn test_authorize_accepts_matching_token() {
        let state = state(Some("s3cret"));
        let authority = authorize(&state, &bearer("s3cret"), "registrar").unwrap();
        assert_eq!(authority.actor(), "registrar");
    }

    #[test]
    fn test_authorize_rejects_wrong_token() {
        let state = state(Some("s3cret"));
        let result = authorize(&state, &bearer("guess"), "registrar");
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_authorize_rejects_missing_header() {
        let state = state(Some("s3cret"));
        let result = authorize(&state, &HeaderMap::new(), "registrar");
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_authorize_rejects_when_not_configured() {
        let state = state(None);
        let result = authorize(&state, &bearer("anything"), "registrar");
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
