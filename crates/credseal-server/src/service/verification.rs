//! Verification service
//!
//! Pure read path: look up by identifier, recompute the trust decision,
//! attach the stored payload. Unknown and malformed identifiers are the
//! same outcome — NOT_FOUND — which is distinct from INVALID
//! (known-but-tampered) and never an internal error.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use credseal_core::{verify, CertificateId, Decision, Payload, Result, Sealer};

use crate::storage::CertificateStore;

/// Outcome of verifying an identifier
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    /// No certificate exists under this identifier
    NotFound,
    /// A certificate exists; here is its trust decision and content
    Decided {
        decision: Decision,
        payload: Payload,
        issued_at: DateTime<Utc>,
    },
}

/// Orchestrates certificate verification
pub struct VerificationService {
    sealer: Arc<Sealer>,
    store: Arc<dyn CertificateStore>,
}

impl VerificationService {
    /// Create a new verification service
    pub fn new(sealer: Arc<Sealer>, store: Arc<dyn CertificateStore>) -> Self {
        Self { sealer, store }
    }

    /// Verify a certificate by its raw identifier string
    ///
    /// The identifier arrives from an untrusted transport (URL path
    /// segment, scanned code); anything that does not parse resolves to
    /// `NotFound`. Storage failures are surfaced, never swallowed.
    pub async fn verify_by_identifier(&self, raw_id: &str) -> Result<VerificationOutcome> {
        let Ok(id) = raw_id.parse::<CertificateId>() else {
            return Ok(VerificationOutcome::NotFound);
        };

        let Some(certificate) = self.store.get(&id).await? else {
            return Ok(VerificationOutcome::NotFound);
        };

        let decision = verify(
            &self.sealer,
            &certificate.payload,
            &certificate.tag,
            certificate.status,
        );

        info!(id = %id, decision = ?decision, "Verified certificate");

        Ok(VerificationOutcome::Decided {
            decision,
            payload: certificate.payload,
            issued_at: certificate.issued_at,
        })
    }
}
