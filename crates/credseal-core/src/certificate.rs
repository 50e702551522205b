//! Certificate record types
//!
//! A certificate is created once, sealed, and never physically deleted.
//! Its only mutable aspect is the one-way ACTIVE → REVOKED transition.

use crate::error::{CredsealError, Result};
use crate::payload::Payload;
use crate::seal::Tag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique certificate identifier
///
/// A 128-bit random value (UUIDv4), rendered in canonical hyphenated
/// form. Generated server-side at issuance; not guessable, not
/// sequential, carries no issuer secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(Uuid);

impl CertificateId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for CertificateId {
    type Err = CredsealError;

    fn from_str(s: &str) -> Result<Self> {
        // Malformed identifiers from untrusted transports surface as
        // NotFound, indistinguishable from unknown ones.
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CredsealError::NotFound(s.to_string()))
    }
}

impl From<Uuid> for CertificateId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Certificate lifecycle status
///
/// REVOKED is terminal: there is no un-revoke path. Reinstatement means
/// issuing a new certificate with a new identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    /// Issued and trusted
    Active,
    /// Issued but no longer trusted
    Revoked,
}

impl CertificateStatus {
    /// Stable text name used in storage columns
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificateStatus::Active => "active",
            CertificateStatus::Revoked => "revoked",
        }
    }
}

impl std::str::FromStr for CertificateStatus {
    type Err = CredsealError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(CertificateStatus::Active),
            "revoked" => Ok(CertificateStatus::Revoked),
            other => Err(CredsealError::Serialization(format!(
                "unknown certificate status '{}'",
                other
            ))),
        }
    }
}

/// Audit record for a revocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevocationInfo {
    /// Reason for revocation
    pub reason: String,
    /// Who revoked this (admin identifier)
    pub revoked_by: String,
    /// When this was revoked
    pub revoked_at: DateTime<Utc>,
}

/// A stored certificate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Public lookup key
    pub id: CertificateId,
    /// Semantic content, immutable after issuance
    pub payload: Payload,
    /// Authenticity tag computed at issuance; never recomputed in place
    pub tag: Tag,
    /// Set exactly once server-side at creation
    pub issued_at: DateTime<Utc>,
    /// Lifecycle status (one-way ACTIVE → REVOKED)
    pub status: CertificateStatus,
    /// Present iff status is REVOKED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation: Option<RevocationInfo>,
}

impl Certificate {
    /// Whether this certificate has been revoked
    pub fn is_revoked(&self) -> bool {
        self.status == CertificateStatus::Revoked
    }
}
