//! # Credseal Core
//!
//! Issuance/verification core for tamper-evident digital certificates.
//!
//! ## Key Concepts
//!
//! - **Payload**: the credential's semantic content — a flat mapping of
//!   field name to string or number, immutable after issuance
//! - **Canonical form**: the unique sorted-key byte serialization a
//!   payload is sealed over, independent of field insertion order
//! - **Tag**: the authenticity value bound to a payload — an Ed25519
//!   signature under the issuer key, or a SHA-256 fingerprint
//! - **Decision**: VALID / INVALID / REVOKED, recomputed from stored
//!   content at every verification
//!
//! ## Invariants
//!
//! 1. A tag is valid iff `sealer.matches(canonicalize(payload), tag)`
//! 2. A certificate verifies VALID only when the tag matches AND the
//!    status is ACTIVE
//! 3. REVOKED is terminal — reinstatement requires a new certificate

pub mod canonical;
pub mod certificate;
pub mod error;
pub mod payload;
pub mod seal;
pub mod verify;

pub use canonical::canonicalize;
pub use certificate::{Certificate, CertificateId, CertificateStatus, RevocationInfo};
pub use error::{CredsealError, Result};
pub use payload::{FieldValue, Payload};
pub use seal::{IssuerKey, IssuerPublicKey, Sealer, SerializableIssuerKey, Tag, TagScheme};
pub use verify::{verify, Decision};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
