//! Sealing: binding an authenticity tag to canonical payload bytes
//!
//! Two schemes share one interface:
//!
//! - `Sha256Fingerprint`: a plain SHA-256 digest of the canonical
//!   bytes. This detects tampering of stored payloads but is NOT proof
//!   of issuer identity — anyone who can run SHA-256 can mint a
//!   matching tag for an arbitrary payload.
//! - `Ed25519`: a signature under the issuer's private key. Only the
//!   issuer can produce a valid tag, so verification against the
//!   published public key gives non-repudiation. This is the default.
//!
//! Key material is loaded once at startup and never mutated.

use crate::error::{CredsealError, Result};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Tag scheme identifier, stored alongside the tag bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagScheme {
    /// SHA-256 digest of canonical bytes (tamper detector only)
    Sha256Fingerprint,
    /// Ed25519 signature over canonical bytes
    Ed25519,
}

impl TagScheme {
    /// Stable text name used in storage columns and API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            TagScheme::Sha256Fingerprint => "sha256_fingerprint",
            TagScheme::Ed25519 => "ed25519",
        }
    }
}

impl std::str::FromStr for TagScheme {
    type Err = CredsealError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sha256_fingerprint" => Ok(TagScheme::Sha256Fingerprint),
            "ed25519" => Ok(TagScheme::Ed25519),
            other => Err(CredsealError::Crypto(format!("unknown tag scheme '{}'", other))),
        }
    }
}

/// Authenticity tag bound to a certificate's payload at issuance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Scheme the tag was produced under
    pub scheme: TagScheme,
    /// Raw tag bytes (32 for a digest, 64 for an Ed25519 signature)
    #[serde(with = "serde_bytes_hex")]
    pub bytes: Vec<u8>,
}

impl Tag {
    /// Hex rendering for storage and display
    pub fn encoded(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Reconstruct a tag from its stored scheme name and hex bytes
    pub fn from_encoded(scheme: &str, encoded: &str) -> Result<Self> {
        let scheme = scheme.parse()?;
        let bytes = hex::decode(encoded)
            .map_err(|e| CredsealError::Crypto(format!("invalid tag encoding: {}", e)))?;
        Ok(Self { scheme, bytes })
    }
}

/// Hex serialization for tag bytes
mod serde_bytes_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Ed25519 issuer key pair
#[derive(Clone)]
pub struct IssuerKey {
    /// Key identifier
    kid: String,
    /// Ed25519 signing key (private)
    signing_key: SigningKey,
    /// Ed25519 verifying key (public)
    verifying_key: VerifyingKey,
}

impl std::fmt::Debug for IssuerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerKey")
            .field("kid", &self.kid)
            .field("signing_key", &"[redacted]")
            .finish()
    }
}

impl IssuerKey {
    /// Generate a new random key pair
    pub fn generate(kid: impl Into<String>) -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Self {
            kid: kid.into(),
            signing_key,
            verifying_key,
        }
    }

    /// Create a key pair from a raw 32-byte seed
    pub fn from_bytes(kid: impl Into<String>, bytes: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(bytes);
        let verifying_key = signing_key.verifying_key();
        Self {
            kid: kid.into(),
            signing_key,
            verifying_key,
        }
    }

    /// Get the key identifier
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// Get the raw signing key bytes
    pub fn signing_key_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }

    /// Get the public half for publication
    pub fn public_key(&self) -> IssuerPublicKey {
        IssuerPublicKey {
            kid: self.kid.clone(),
            verifying_key: self.verifying_key,
        }
    }
}

/// Published issuer public key
#[derive(Clone)]
pub struct IssuerPublicKey {
    kid: String,
    verifying_key: VerifyingKey,
}

impl std::fmt::Debug for IssuerPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuerPublicKey")
            .field("kid", &self.kid)
            .finish()
    }
}

impl IssuerPublicKey {
    /// Create a public key from raw bytes
    pub fn from_bytes(kid: impl Into<String>, bytes: &[u8; 32]) -> Result<Self> {
        let verifying_key = VerifyingKey::from_bytes(bytes)
            .map_err(|e| CredsealError::Crypto(e.to_string()))?;
        Ok(Self {
            kid: kid.into(),
            verifying_key,
        })
    }

    /// Get the key identifier
    pub fn kid(&self) -> &str {
        &self.kid
    }

    /// Get the raw verifying key bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// Verify an Ed25519 tag against canonical bytes
    pub fn verify_tag(&self, canonical: &[u8], tag: &Tag) -> bool {
        if tag.scheme != TagScheme::Ed25519 {
            return false;
        }
        let Ok(signature_bytes) = <[u8; 64]>::try_from(tag.bytes.as_slice()) else {
            return false;
        };
        let signature = Signature::from_bytes(&signature_bytes);
        self.verifying_key.verify(canonical, &signature).is_ok()
    }
}

/// Serializable issuer public key for the publication endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableIssuerKey {
    /// Key identifier
    pub kid: String,
    /// Base64-encoded public key bytes
    pub key: String,
}

impl From<&IssuerPublicKey> for SerializableIssuerKey {
    fn from(pk: &IssuerPublicKey) -> Self {
        use base64::{engine::general_purpose::STANDARD, Engine};
        Self {
            kid: pk.kid.clone(),
            key: STANDARD.encode(pk.to_bytes()),
        }
    }
}

impl TryFrom<SerializableIssuerKey> for IssuerPublicKey {
    type Error = CredsealError;

    fn try_from(sik: SerializableIssuerKey) -> Result<Self> {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let bytes = STANDARD
            .decode(&sik.key)
            .map_err(|e| CredsealError::Crypto(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CredsealError::Crypto("invalid key length".into()))?;
        IssuerPublicKey::from_bytes(sik.kid, &bytes)
    }
}

/// Produces and checks authenticity tags over canonical payload bytes
#[derive(Debug, Clone)]
pub enum Sealer {
    /// Deterministic SHA-256 fingerprint (no issuer secret)
    Fingerprint,
    /// Ed25519 signature under the issuer key
    Ed25519(IssuerKey),
}

impl Sealer {
    /// The scheme this sealer produces
    pub fn scheme(&self) -> TagScheme {
        match self {
            Sealer::Fingerprint => TagScheme::Sha256Fingerprint,
            Sealer::Ed25519(_) => TagScheme::Ed25519,
        }
    }

    /// Published public key, if the scheme has one
    pub fn public_key(&self) -> Option<IssuerPublicKey> {
        match self {
            Sealer::Fingerprint => None,
            Sealer::Ed25519(key) => Some(key.public_key()),
        }
    }

    /// Produce a tag over canonical bytes
    pub fn seal(&self, canonical: &[u8]) -> Tag {
        match self {
            Sealer::Fingerprint => Tag {
                scheme: TagScheme::Sha256Fingerprint,
                bytes: Sha256::digest(canonical).to_vec(),
            },
            Sealer::Ed25519(key) => Tag {
                scheme: TagScheme::Ed25519,
                bytes: key.signing_key.sign(canonical).to_bytes().to_vec(),
            },
        }
    }

    /// Check a stored tag against canonical bytes
    ///
    /// Total: a tag under the wrong scheme or with undecodable bytes is
    /// a non-match, never an error.
    pub fn matches(&self, canonical: &[u8], tag: &Tag) -> bool {
        match self {
            Sealer::Fingerprint => {
                tag.scheme == TagScheme::Sha256Fingerprint
                    && Sha256::digest(canonical).as_slice() == tag.bytes.as_slice()
            }
            Sealer::Ed25519(key) => key.public_key().verify_tag(canonical, tag),
        }
    }
}
