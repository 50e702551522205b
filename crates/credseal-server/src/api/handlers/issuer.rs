//! Issuer public key handler

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use credseal_core::SerializableIssuerKey;

use crate::api::error::ApiError;

use super::AppState;

/// Published issuer key response
#[derive(Debug, Serialize)]
pub struct IssuerKeyResponse {
    /// Tag scheme certificates are sealed under
    pub scheme: String,
    /// The public key (Ed25519 mode only)
    pub key: SerializableIssuerKey,
}

/// Publish the issuer's public key
///
/// GET /v1/issuer/key
///
/// Third parties can fetch this once and verify Ed25519 tags without
/// calling the verification endpoint. In fingerprint mode there is no
/// issuer key to publish and the route answers 404.
pub async fn get_issuer_key(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IssuerKeyResponse>, ApiError> {
    let public_key = state.sealer.public_key().ok_or_else(|| {
        ApiError::NotFound("no issuer key: sealing runs in fingerprint mode".into())
    })?;

    Ok(Json(IssuerKeyResponse {
        scheme: state.sealer.scheme().as_str().into(),
        key: SerializableIssuerKey::from(&public_key),
    }))
}
