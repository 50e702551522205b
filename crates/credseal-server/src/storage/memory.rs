//! In-memory storage backend
//!
//! Default storage implementation using an in-memory hashmap.
//! Suitable for development and single-instance deployments.
//! Data is lost on restart.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::info;

use credseal_core::{Certificate, CertificateId, CertificateStatus, RevocationInfo};

use super::{CertificateStore, StorageError};

/// In-memory certificate store
///
/// The write lock is held across the whole check-then-insert in
/// `create` and the whole check-then-update in `revoke`, which makes
/// each operation on one identifier linearizable with respect to reads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    certificates: RwLock<HashMap<CertificateId, Certificate>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CertificateStore for MemoryStore {
    async fn create(&self, certificate: Certificate) -> Result<(), StorageError> {
        let mut certificates = self.certificates.write().unwrap();
        match certificates.entry(certificate.id) {
            Entry::Occupied(_) => Err(StorageError::Duplicate(certificate.id)),
            Entry::Vacant(slot) => {
                info!(id = %certificate.id, "Stored certificate");
                slot.insert(certificate);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &CertificateId) -> Result<Option<Certificate>, StorageError> {
        let certificates = self.certificates.read().unwrap();
        Ok(certificates.get(id).cloned())
    }

    async fn revoke(&self, id: &CertificateId, info: RevocationInfo) -> Result<(), StorageError> {
        let mut certificates = self.certificates.write().unwrap();
        let certificate = certificates
            .get_mut(id)
            .ok_or(StorageError::NotFound(*id))?;

        // Idempotent: keep the first revocation's audit record
        if certificate.status == CertificateStatus::Revoked {
            return Ok(());
        }

        info!(id = %id, reason = %info.reason, revoked_by = %info.revoked_by, "Revoked certificate");
        certificate.status = CertificateStatus::Revoked;
        certificate.revocation = Some(info);
        Ok(())
    }

    async fn is_revoked(&self, id: &CertificateId) -> Result<bool, StorageError> {
        let certificates = self.certificates.read().unwrap();
        Ok(certificates.get(id).is_some_and(Certificate::is_revoked))
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let certificates = self.certificates.read().unwrap();
        Ok(certificates.len())
    }
}
