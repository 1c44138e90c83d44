//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption with associated data. Each encryption
//! generates a unique random nonce.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit, OsRng, Payload, rand_core::RngCore},
};
use zeroize::Zeroizing;

use super::{CryptoError, DerivedKey};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Raw output of an encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedData {
    /// The nonce used for this encryption
    pub nonce: [u8; NONCE_SIZE],
    /// The ciphertext with the authentication tag appended
    pub ciphertext: Vec<u8>,
}

/// Encrypt `plaintext`, authenticating `aad` alongside it.
pub fn encrypt(plaintext: &[u8], aad: &[u8], key: &DerivedKey) -> Result<SealedData, CryptoError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Cipher(format!("failed to create cipher: {}", e)))?;

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), Payload { msg: plaintext, aad })
        .map_err(|e| CryptoError::Cipher(format!("encryption failed: {}", e)))?;

    Ok(SealedData { nonce, ciphertext })
}

/// Decrypt `ciphertext`; fails unless key, nonce, ciphertext and `aad` all match.
pub fn decrypt(
    nonce: &[u8],
    ciphertext: &[u8],
    aad: &[u8],
    key: &DerivedKey,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if nonce.len() != NONCE_SIZE {
        return Err(CryptoError::Cipher(format!(
            "invalid nonce size: expected {}, got {}",
            NONCE_SIZE,
            nonce.len()
        )));
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Cipher(format!("failed to create cipher: {}", e)))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad })
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::Authentication)
}
