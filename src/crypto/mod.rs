//! Cryptographic primitives for sealed salary packages.
//!
//! Provides AES-256-GCM encryption with Argon2id key derivation. Errors here
//! are low-level; the store maps them to save- or load-side engine errors.

mod encryption;
mod key_derivation;
mod secure_memory;

use thiserror::Error;

pub use encryption::{NONCE_SIZE, SealedData, decrypt, encrypt};
pub use key_derivation::{
    DerivedKey, KeyDerivationParams, MAX_MEMORY_COST, MAX_PARALLELISM, MAX_TIME_COST, SALT_SIZE,
    derive_key,
};
pub use secure_memory::SecureString;

/// Failures of the cryptographic primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Key derivation parameters or salt were rejected.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The cipher could not be set up or the nonce is malformed.
    #[error("cipher error: {0}")]
    Cipher(String),

    /// Authentication failed: wrong key, or ciphertext or header modified.
    #[error("invalid passphrase or corrupted data")]
    Authentication,
}
