//! Verification decision procedure
//!
//! Combines tag recomputation with revocation state into a single trust
//! decision. Total over well-formed stored records and side-effect
//! free: a tag mismatch is a decision outcome, never an error.

use crate::canonical::canonicalize;
use crate::certificate::CertificateStatus;
use crate::payload::Payload;
use crate::seal::{Sealer, Tag};
use serde::{Deserialize, Serialize};

/// Trust decision for a stored certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Tag matches and the certificate is active
    Valid,
    /// Tag does not match the stored payload
    Invalid,
    /// Tag matches but the certificate has been revoked
    Revoked,
}

/// Decide the trust status of a stored record
///
/// Order matters: a tampered payload is INVALID even if the record is
/// also revoked — the revocation state of content that no longer
/// matches its tag is meaningless.
pub fn verify(
    sealer: &Sealer,
    payload: &Payload,
    stored_tag: &Tag,
    status: CertificateStatus,
) -> Decision {
    // Canonicalization of a stored record can only fail on a corrupted
    // payload, which is exactly what INVALID means.
    let Ok(canonical) = canonicalize(payload) else {
        return Decision::Invalid;
    };

    if !sealer.matches(&canonical, stored_tag) {
        return Decision::Invalid;
    }

    match status {
        CertificateStatus::Revoked => Decision::Revoked,
        CertificateStatus::Active => Decision::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seal::IssuerKey;

    fn sample_payload() -> Payload {
        Payload::new()
            .with("name", "Asha Rao")
            .with("institution", "X University")
            .with("program", "B.Sc CS")
            .with("year", "2024")
            .with("score", "8.7")
    }

    fn seal_payload(sealer: &Sealer, payload: &Payload) -> Tag {
        sealer.seal(&canonicalize(payload).unwrap())
    }

    #[test]
    fn test_round_trip_validity() {
        for sealer in [
            Sealer::Fingerprint,
            Sealer::Ed25519(IssuerKey::generate("issuer-1")),
        ] {
            let payload = sample_payload();
            let tag = seal_payload(&sealer, &payload);

            assert_eq!(
                verify(&sealer, &payload, &tag, CertificateStatus::Active),
                Decision::Valid
            );
        }
    }

    #[test]
    fn test_single_field_mutation_is_invalid() {
        let sealer = Sealer::Ed25519(IssuerKey::generate("issuer-1"));
        let payload = sample_payload();
        let tag = seal_payload(&sealer, &payload);

        let mut tampered = payload.clone();
        tampered.insert("score", "9.9");

        assert_eq!(
            verify(&sealer, &tampered, &tag, CertificateStatus::Active),
            Decision::Invalid
        );
    }

    #[test]
    fn test_revoked_with_matching_tag_is_revoked() {
        let sealer = Sealer::Ed25519(IssuerKey::generate("issuer-1"));
        let payload = sample_payload();
        let tag = seal_payload(&sealer, &payload);

        assert_eq!(
            verify(&sealer, &payload, &tag, CertificateStatus::Revoked),
            Decision::Revoked
        );
    }

    #[test]
    fn test_tampered_and_revoked_is_invalid() {
        // INVALID takes precedence over REVOKED
        let sealer = Sealer::Fingerprint;
        let payload = sample_payload();
        let tag = seal_payload(&sealer, &payload);

        let mut tampered = payload.clone();
        tampered.insert("name", "Someone Else");

        assert_eq!(
            verify(&sealer, &tampered, &tag, CertificateStatus::Revoked),
            Decision::Invalid
        );
    }

    #[test]
    fn test_field_order_does_not_affect_decision() {
        let sealer = Sealer::Ed25519(IssuerKey::generate("issuer-1"));
        let tag = seal_payload(&sealer, &sample_payload());

        // Same fields, reversed insertion order
        let reordered = Payload::new()
            .with("score", "8.7")
            .with("year", "2024")
            .with("program", "B.Sc CS")
            .with("institution", "X University")
            .with("name", "Asha Rao");

        assert_eq!(
            verify(&sealer, &reordered, &tag, CertificateStatus::Active),
            Decision::Valid
        );
    }

    #[test]
    fn test_truncated_tag_is_invalid_not_error() {
        let sealer = Sealer::Ed25519(IssuerKey::generate("issuer-1"));
        let payload = sample_payload();
        let mut tag = seal_payload(&sealer, &payload);
        tag.bytes.truncate(10);

        assert_eq!(
            verify(&sealer, &payload, &tag, CertificateStatus::Active),
            Decision::Invalid
        );
    }
}
