//! Certificate Server
//!
//! HTTP service around the credseal issuance/verification core:
//! - Issues sealed certificates from untrusted payloads
//! - Verifies certificates by identifier (VALID / INVALID / REVOKED)
//! - Handles admin-only, audit-logged revocation
//! - Publishes the issuer public key for independent verification
//!
//! ## API Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check with scheme and record count
//! - `POST /v1/certificates` - Issue a certificate
//! - `GET /v1/certificates/{id}` - Verify a certificate
//! - `POST /v1/certificates/{id}/revoke` - Revoke (admin bearer token)
//! - `GET /v1/issuer/key` - Published issuer public key

pub mod api;
pub mod keys;
pub mod service;
pub mod storage;

pub use api::create_router;
pub use api::handlers::AppState;
pub use keys::load_sealer;
pub use service::{
    IssuanceService, RevocationAuthority, RevocationService, ServiceConfig, VerificationOutcome,
    VerificationService,
};
pub use storage::{CertificateStore, MemoryStore, StorageError};
#[cfg(feature = "postgres")]
pub use storage::PostgresStore;
