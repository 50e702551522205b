//! Storage abstraction for the certificate store
//!
//! Trait-based so the service can run on the in-memory backend
//! (default) or PostgreSQL (feature `postgres`). The store is the sole
//! shared mutable resource: create must be an atomic insert-if-absent,
//! and create/get/revoke on one identifier must be linearizable.
//!
//! Certificates are never physically deleted — revocation flips the
//! status and records audit fields, nothing more.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use memory::MemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStore;

use async_trait::async_trait;
use credseal_core::{Certificate, CertificateId, RevocationInfo};
use std::fmt::Debug;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Certificate already exists: {0}")]
    Duplicate(CertificateId),

    #[error("Certificate not found: {0}")]
    NotFound(CertificateId),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// Storage backend for certificate records
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait CertificateStore: Send + Sync + Debug {
    /// Insert a new certificate record
    ///
    /// Insert-if-absent: fails with [`StorageError::Duplicate`] when the
    /// identifier is already present, leaving the existing record
    /// untouched. No concurrent reader may observe a partial record.
    async fn create(&self, certificate: Certificate) -> Result<(), StorageError>;

    /// Look up a certificate by identifier
    async fn get(&self, id: &CertificateId) -> Result<Option<Certificate>, StorageError>;

    /// Mark a certificate revoked
    ///
    /// Fails with [`StorageError::NotFound`] when the identifier is
    /// absent. Idempotent: revoking an already-revoked certificate is a
    /// no-op success that keeps the original revocation's audit fields.
    async fn revoke(&self, id: &CertificateId, info: RevocationInfo) -> Result<(), StorageError>;

    /// Whether a certificate is revoked (false when unknown)
    async fn is_revoked(&self, id: &CertificateId) -> Result<bool, StorageError>;

    /// Number of stored certificates (for readiness reporting)
    async fn count(&self) -> Result<usize, StorageError>;
}
