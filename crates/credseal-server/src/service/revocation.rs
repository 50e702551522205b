//! Revocation service
//!
//! Revocation is a one-way administrative transition. The storage
//! mechanics live in the certificate store; this service owns the
//! policy surface: an authorization context is required, and every
//! revocation records who, why and when.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use credseal_core::{CertificateId, Result, RevocationInfo};

use crate::storage::CertificateStore;

/// Proof that the caller passed the transport layer's admin check
///
/// Handlers construct one only after authenticating the request, so a
/// revocation call can never reach the store without an authorization
/// context attached.
#[derive(Debug, Clone)]
pub struct RevocationAuthority {
    actor: String,
}

impl RevocationAuthority {
    /// Create an authority for an authenticated admin actor
    pub fn new(actor: impl Into<String>) -> Self {
        Self { actor: actor.into() }
    }

    /// The authenticated admin identifier
    pub fn actor(&self) -> &str {
        &self.actor
    }
}

/// Orchestrates certificate revocation
pub struct RevocationService {
    store: Arc<dyn CertificateStore>,
}

impl RevocationService {
    /// Create a new revocation service
    pub fn new(store: Arc<dyn CertificateStore>) -> Self {
        Self { store }
    }

    /// Mark a certificate revoked
    ///
    /// Idempotent: revoking an already-revoked certificate succeeds
    /// without touching the original audit record. Unknown and
    /// malformed identifiers fail with `NotFound`.
    pub async fn revoke(
        &self,
        authority: &RevocationAuthority,
        raw_id: &str,
        reason: impl Into<String>,
    ) -> Result<()> {
        let id: CertificateId = raw_id.parse()?;

        let info = RevocationInfo {
            reason: reason.into(),
            revoked_by: authority.actor().to_string(),
            revoked_at: Utc::now(),
        };

        self.store.revoke(&id, info).await?;

        info!(id = %id, revoked_by = %authority.actor(), "Revocation recorded");
        Ok(())
    }

    /// Whether a certificate is currently revoked (false when unknown)
    pub async fn is_revoked(&self, id: &CertificateId) -> Result<bool> {
        Ok(self.store.is_revoked(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{CertificateStore, MemoryStore};
    use chrono::Utc;
    use credseal_core::{
        canonicalize, Certificate, CertificateStatus, CredsealError, Payload, Sealer,
    };

    async fn store_with_certificate() -> (Arc<MemoryStore>, CertificateId) {
        let store = Arc::new(MemoryStore::new());
        let payload = Payload::new().with("name", "Asha Rao");
        let sealer = Sealer::Fingerprint;
        let tag = sealer.seal(&canonicalize(&payload).unwrap());
        let id = CertificateId::generate();

        store
            .create(Certificate {
                id,
                payload,
                tag,
                issued_at: Utc::now(),
                status: CertificateStatus::Active,
                revocation: None,
            })
            .await
            .unwrap();

        (store, id)
    }

    #[tokio::test]
    async fn test_revoke_records_actor_and_reason() {
        let (store, id) = store_with_certificate().await;
        let service = RevocationService::new(store.clone());
        let authority = RevocationAuthority::new("registrar@example.edu");

        service
            .revoke(&authority, &id.to_string(), "transcription error")
            .await
            .unwrap();

        let stored = store.get(&id).await.unwrap().unwrap();
        let revocation = stored.revocation.unwrap();
        assert_eq!(revocation.revoked_by, "registrar@example.edu");
        assert_eq!(revocation.reason, "transcription error");
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let (store, id) = store_with_certificate().await;
        let service = RevocationService::new(store);
        let authority = RevocationAuthority::new("admin");

        service.revoke(&authority, &id.to_string(), "first").await.unwrap();
        service.revoke(&authority, &id.to_string(), "second").await.unwrap();

        assert!(service.is_revoked(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_unknown_identifier_is_not_found() {
        let service = RevocationService::new(Arc::new(MemoryStore::new()));
        let authority = RevocationAuthority::new("admin");

        let result = service
            .revoke(&authority, &CertificateId::generate().to_string(), "nope")
            .await;
        assert!(matches!(result, Err(CredsealError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_revoke_malformed_identifier_is_not_found() {
        let service = RevocationService::new(Arc::new(MemoryStore::new()));
        let authority = RevocationAuthority::new("admin");

        let result = service.revoke(&authority, "not-a-uuid", "nope").await;
        assert!(matches!(result, Err(CredsealError::NotFound(_))));
    }
}
