//! Envelope wire format and payload decoding.
//!
//! A sealed package is compact JSON:
//!
//! ```text
//! {"salary_package_envelope":{"version":1,"saved_at":"...","kdf":{...}},
//!  "nonce":"<base64>","ciphertext":"<base64>"}
//! ```
//!
//! The `salary_package_envelope` key marks the document as sealed; its value
//! is the header, which is authenticated as associated data. A document
//! without the marker is a legacy plain [`PackageRecord`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::KeyDerivationParams;
use crate::error::{EngineError, EngineResult};

use super::PackageRecord;

/// Key marking a document as a sealed envelope.
pub const ENVELOPE_MARKER: &str = "salary_package_envelope";

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Clear-text envelope header, bound to the ciphertext as associated data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeHeader {
    /// Envelope format version.
    pub version: u8,
    /// When the package was sealed (whole seconds).
    pub saved_at: DateTime<Utc>,
    /// Key derivation parameters, salt included.
    pub kdf: KeyDerivationParams,
}

impl EnvelopeHeader {
    /// Bytes authenticated alongside the ciphertext.
    pub fn associated_data(&self) -> EngineResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| EngineError::encryption(format!("failed to encode header: {}", e)))
    }
}

/// A sealed package as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvelopeDocument {
    /// The header, stored under the marker key.
    #[serde(rename = "salary_package_envelope")]
    pub header: EnvelopeHeader,
    /// AES-GCM nonce (base64).
    pub nonce: String,
    /// AES-GCM ciphertext with tag (base64).
    pub ciphertext: String,
}

/// The opaque bytes produced by sealing a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope(Vec<u8>);

impl EncryptedEnvelope {
    pub(crate) fn from_document(document: &EnvelopeDocument) -> EngineResult<Self> {
        serde_json::to_vec(document)
            .map(Self)
            .map_err(|e| EngineError::encryption(format!("failed to encode envelope: {}", e)))
    }

    /// Returns the envelope bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the envelope, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for EncryptedEnvelope {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Raw package content as delivered by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackagePayload {
    /// Bytes read from a file or blob.
    Bytes(Vec<u8>),
    /// Text already decoded by the caller.
    Text(String),
}

/// A payload after the decode step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPackage {
    /// A sealed envelope; needs a passphrase to open.
    Sealed(EnvelopeDocument),
    /// A legacy plain record.
    Legacy(PackageRecord),
}

impl DecodedPackage {
    /// Returns true if opening this package needs a passphrase.
    pub fn is_sealed(&self) -> bool {
        matches!(self, DecodedPackage::Sealed(_))
    }
}

impl PackagePayload {
    /// Classifies the payload as a sealed envelope or a legacy record.
    ///
    /// Content that is not UTF-8 JSON, or a legacy record with missing or
    /// mistyped fields, is a [`EngineError::Parse`]. A document carrying the
    /// envelope marker but with a broken envelope structure is a
    /// [`EngineError::Decryption`]: it was sealed and has been damaged.
    pub fn decode(&self) -> EngineResult<DecodedPackage> {
        let text = match self {
            PackagePayload::Bytes(bytes) => std::str::from_utf8(bytes)
                .map_err(|e| EngineError::parse(format!("package is not UTF-8 text: {}", e)))?,
            PackagePayload::Text(text) => text.as_str(),
        };

        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| EngineError::parse(format!("package is not valid JSON: {}", e)))?;

        let sealed = value
            .as_object()
            .is_some_and(|object| object.contains_key(ENVELOPE_MARKER));

        if sealed {
            serde_json::from_value(value)
                .map(DecodedPackage::Sealed)
                .map_err(|e| EngineError::decryption(format!("envelope is corrupted: {}", e)))
        } else {
            PackageRecord::from_value(value).map(DecodedPackage::Legacy)
        }
    }
}

impl From<Vec<u8>> for PackagePayload {
    fn from(bytes: Vec<u8>) -> Self {
        PackagePayload::Bytes(bytes)
    }
}

impl From<String> for PackagePayload {
    fn from(text: String) -> Self {
        PackagePayload::Text(text)
    }
}

impl From<EncryptedEnvelope> for PackagePayload {
    fn from(envelope: EncryptedEnvelope) -> Self {
        PackagePayload::Bytes(envelope.into_bytes())
    }
}
