//! API request handlers

pub mod issue;
pub mod issuer;
pub mod revoke;
pub mod verify;

pub use issue::{issue_certificate, IssueCertificateResponse};
pub use issuer::{get_issuer_key, IssuerKeyResponse};
pub use revoke::{revoke_certificate, RevokeCertificateRequest, RevokeCertificateResponse};
pub use verify::{verify_certificate, VerifyCertificateResponse};

use std::sync::Arc;

use credseal_core::Sealer;

use crate::service::{IssuanceService, RevocationService, VerificationService};
use crate::storage::CertificateStore;

/// Application state shared across handlers
pub struct AppState {
    /// Issuance orchestrator
    pub issuance: IssuanceService,
    /// Verification orchestrator
    pub verification: VerificationService,
    /// Revocation orchestrator
    pub revocation: RevocationService,
    /// Process-wide sealer (for readiness/key endpoints)
    pub sealer: Arc<Sealer>,
    /// Certificate store (for readiness reporting)
    pub store: Arc<dyn CertificateStore>,
    /// Bearer token required for revocation administration
    pub admin_token: Option<String>,
}
