//! Issuance service
//!
//! Orchestrates a single certificate creation: validate the untrusted
//! payload, generate a fresh identifier, canonicalize, seal, persist,
//! and hand back the identifier plus its verification reference.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use credseal_core::{
    canonicalize, Certificate, CertificateId, CertificateStatus, CredsealError, Payload, Result,
    Sealer,
};

use crate::storage::{CertificateStore, StorageError};

use super::ServiceConfig;

/// Fields every issued credential must carry
pub const REQUIRED_FIELDS: &[&str] = &["name", "institution", "program", "year", "score"];

/// Identifier regeneration attempts before surfacing a collision.
/// At 128 random bits a single collision is already astronomically
/// unlikely; three misses in a row mean something else is wrong.
const MAX_ID_ATTEMPTS: u32 = 3;

/// Result of a successful issuance
#[derive(Debug, Clone)]
pub struct IssuedCertificate {
    /// The new certificate's public lookup key
    pub id: CertificateId,
    /// External-facing reference resolving to the identifier
    pub verification_reference: String,
}

/// Orchestrates certificate issuance
pub struct IssuanceService {
    sealer: Arc<Sealer>,
    store: Arc<dyn CertificateStore>,
    config: ServiceConfig,
}

impl IssuanceService {
    /// Create a new issuance service
    pub fn new(sealer: Arc<Sealer>, store: Arc<dyn CertificateStore>, config: ServiceConfig) -> Self {
        Self { sealer, store, config }
    }

    /// Issue a certificate from an untrusted payload mapping
    ///
    /// `issued_at` is set server-side; nothing timestamp-shaped is
    /// trusted from the request.
    pub async fn issue(
        &self,
        payload_json: serde_json::Map<String, serde_json::Value>,
    ) -> Result<IssuedCertificate> {
        let payload = Payload::from_json(payload_json)?;
        payload.require_fields(REQUIRED_FIELDS)?;

        let canonical = canonicalize(&payload)?;
        let tag = self.sealer.seal(&canonical);

        let mut last_collision: Option<StorageError> = None;
        for attempt in 0..MAX_ID_ATTEMPTS {
            let id = CertificateId::generate();
            let certificate = Certificate {
                id,
                payload: payload.clone(),
                tag: tag.clone(),
                issued_at: Utc::now(),
                status: CertificateStatus::Active,
                revocation: None,
            };

            match self.store.create(certificate).await {
                Ok(()) => {
                    info!(
                        id = %id,
                        scheme = %tag.scheme.as_str(),
                        fields = payload.len(),
                        "Issued certificate"
                    );
                    return Ok(IssuedCertificate {
                        id,
                        verification_reference: self.config.verification_reference(&id),
                    });
                }
                Err(StorageError::Duplicate(dup)) => {
                    // Retry with a fresh identifier; never overwrite
                    warn!(id = %dup, attempt, "Identifier collision on create, regenerating");
                    last_collision = Some(StorageError::Duplicate(dup));
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(last_collision
            .map(CredsealError::from)
            .unwrap_or_else(|| CredsealError::Storage("identifier generation exhausted".into())))
    }
}
