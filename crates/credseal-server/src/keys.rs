//! Issuer key material loading
//!
//! The sealer is process-wide state: built once at startup from the
//! environment, injected into the services, never mutated. Bad key
//! material is a fatal configuration error — the server must refuse to
//! start rather than mint certificates it cannot stand behind.
//!
//! # Environment Variables
//!
//! - `CREDSEAL_SEAL_MODE`: `ed25519` (default) or `fingerprint`
//! - `CREDSEAL_ISSUER_KEY`: base64-encoded 32-byte Ed25519 seed; a
//!   fresh key is generated when absent (issued certificates then do
//!   not survive a restart in ed25519 mode)
//! - `CREDSEAL_ISSUER_KID`: key identifier, default `credseal-issuer`

use base64::{engine::general_purpose::STANDARD, Engine};
use std::env;
use tracing::{info, warn};

use credseal_core::{CredsealError, IssuerKey, Result, Sealer};

/// Build the sealer from environment configuration
pub fn load_sealer() -> Result<Sealer> {
    let mode = env::var("CREDSEAL_SEAL_MODE").unwrap_or_else(|_| "ed25519".into());

    match mode.as_str() {
        "fingerprint" => {
            warn!(
                "Sealing in fingerprint mode: tags detect tampering but do NOT \
                 prove issuer identity"
            );
            Ok(Sealer::Fingerprint)
        }
        "ed25519" => {
            let kid = env::var("CREDSEAL_ISSUER_KID").unwrap_or_else(|_| "credseal-issuer".into());

            let key = match env::var("CREDSEAL_ISSUER_KEY") {
                Ok(encoded) => issuer_key_from_base64(&kid, &encoded)?,
                Err(_) => {
                    let key = IssuerKey::generate(&kid);
                    warn!(
                        kid = %key.kid(),
                        "CREDSEAL_ISSUER_KEY not set, generated an ephemeral issuer key"
                    );
                    key
                }
            };

            info!(kid = %key.kid(), "Loaded issuer signing key");
            Ok(Sealer::Ed25519(key))
        }
        other => Err(CredsealError::Crypto(format!(
            "unknown seal mode '{}' (expected 'ed25519' or 'fingerprint')",
            other
        ))),
    }
}

fn issuer_key_from_base64(kid: &str, encoded: &str) -> Result<IssuerKey> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CredsealError::Crypto(format!("CREDSEAL_ISSUER_KEY is not valid base64: {}", e)))?;
    let seed: [u8; 32] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| {
            CredsealError::Crypto(format!(
                "CREDSEAL_ISSUER_KEY must decode to 32 bytes, got {}",
                v.len()
            ))
        })?;
    Ok(IssuerKey::from_bytes(kid, &seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use credseal_core::TagScheme;

    #[test]
    fn test_issuer_key_from_base64_round_trip() {
        let original = IssuerKey::generate("kid-1");
        let encoded = STANDARD.encode(original.signing_key_bytes());

        let restored = issuer_key_from_base64("kid-1", &encoded).unwrap();
        assert_eq!(restored.signing_key_bytes(), original.signing_key_bytes());
    }

    #[test]
    fn test_issuer_key_rejects_bad_base64() {
        let result = issuer_key_from_base64("kid-1", "not base64 !!!");
        assert!(matches!(result, Err(CredsealError::Crypto(_))));
    }

    #[test]
    fn test_issuer_key_rejects_wrong_length() {
        let encoded = STANDARD.encode([0u8; 16]);
        let result = issuer_key_from_base64("kid-1", &encoded);
        assert!(matches!(result, Err(CredsealError::Crypto(_))));
    }

    #[test]
    fn test_restored_key_produces_same_scheme() {
        let key = IssuerKey::generate("kid-1");
        let sealer = Sealer::Ed25519(key);
        assert_eq!(sealer.scheme(), TagScheme::Ed25519);
    }
}
