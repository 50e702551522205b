//! Error types for the certificate core

use thiserror::Error;

/// Result type alias using CredsealError
pub type Result<T> = std::result::Result<T, CredsealError>;

/// Errors that can occur in the certificate core
#[derive(Error, Debug)]
pub enum CredsealError {
    /// Payload contains a value the canonical encoding cannot represent
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Required payload field absent at issuance
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Identifier already present on create
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    /// Identifier absent at lookup or revoke
    #[error("Certificate not found: {0}")]
    NotFound(String),

    /// Underlying persistence failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Cryptographic error (bad key material, invalid encoding)
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CredsealError {
    fn from(err: serde_json::Error) -> Self {
        CredsealError::Serialization(err.to_string())
    }
}

impl From<ed25519_dalek::SignatureError> for CredsealError {
    fn from(err: ed25519_dalek::SignatureError) -> Self {
        CredsealError::Crypto(err.to_string())
    }
}
