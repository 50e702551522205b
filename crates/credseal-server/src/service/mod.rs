//! Service layer: issuance, verification, revocation
//!
//! These orchestrators sit between the transport layer and the core.
//! They own no transport concerns — handlers translate HTTP to these
//! calls and render the results as JSON.

pub mod issuance;
pub mod revocation;
pub mod verification;

pub use issuance::{IssuanceService, IssuedCertificate};
pub use revocation::{RevocationAuthority, RevocationService};
pub use verification::{VerificationOutcome, VerificationService};

use crate::storage::StorageError;
use credseal_core::CredsealError;

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Public base URL embedded into verification references
    pub public_base_url: String,
}

impl ServiceConfig {
    /// Build the verification reference for an identifier
    ///
    /// The reference is what downstream collaborators embed into QR
    /// codes, links or generated documents.
    pub fn verification_reference(&self, id: &credseal_core::CertificateId) -> String {
        format!("{}/verify/{}", self.public_base_url.trim_end_matches('/'), id)
    }
}

impl From<StorageError> for CredsealError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate(id) => CredsealError::DuplicateIdentifier(id.to_string()),
            StorageError::NotFound(id) => CredsealError::NotFound(id.to_string()),
            other => CredsealError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credseal_core::CertificateId;

    #[test]
    fn test_verification_reference_shape() {
        let config = ServiceConfig {
            public_base_url: "https://certs.example.edu".into(),
        };
        let id = CertificateId::generate();

        let reference = config.verification_reference(&id);
        assert_eq!(reference, format!("https://certs.example.edu/verify/{}", id));
    }

    #[test]
    fn test_verification_reference_trims_trailing_slash() {
        let config = ServiceConfig {
            public_base_url: "https://certs.example.edu/".into(),
        };
        let id = CertificateId::generate();

        let reference = config.verification_reference(&id);
        assert!(!reference.contains(".edu//"));
    }
}
