//! Key derivation using Argon2id
//!
//! Derives encryption keys from user passphrases using Argon2id,
//! a memory-hard key derivation function resistant to GPU/ASIC attacks.

use aes_gcm::aead::{OsRng, rand_core::RngCore};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::CryptoError;

/// Size of the random salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Largest accepted memory cost in KiB (1 GiB).
pub const MAX_MEMORY_COST: u32 = 1024 * 1024;

/// Largest accepted number of Argon2 passes.
pub const MAX_TIME_COST: u32 = 10;

/// Largest accepted degree of parallelism.
pub const MAX_PARALLELISM: u32 = 16;

/// Parameters for key derivation, stored in the clear next to the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyDerivationParams {
    /// Salt for key derivation (base64 encoded)
    pub salt: String,
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            salt: String::new(), // Generated per envelope
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KeyDerivationParams {
    /// Create default-cost params with a random salt
    pub fn new() -> Self {
        Self::default().with_fresh_salt()
    }

    /// Create params with specific costs and an empty salt
    pub fn with_costs(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            salt: String::new(),
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Checks the costs against [`MAX_MEMORY_COST`], [`MAX_TIME_COST`] and
    /// [`MAX_PARALLELISM`].
    pub fn check_limits(&self) -> Result<(), CryptoError> {
        let costs = [
            ("memory cost", self.memory_cost, MAX_MEMORY_COST),
            ("time cost", self.time_cost, MAX_TIME_COST),
            ("parallelism", self.parallelism, MAX_PARALLELISM),
        ];

        for (name, value, limit) in costs {
            if value > limit {
                return Err(CryptoError::KeyDerivation(format!(
                    "{} {} exceeds the limit of {}",
                    name, value, limit
                )));
            }
        }

        Ok(())
    }

    /// Returns a copy of these costs with a newly generated random salt.
    pub fn with_fresh_salt(&self) -> Self {
        let mut salt = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt);
        Self {
            salt: STANDARD.encode(salt),
            ..self.clone()
        }
    }
}

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; 32],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

/// Derive an encryption key from a passphrase
///
/// Costs above the ceilings in [`KeyDerivationParams::check_limits`] are
/// rejected before Argon2 runs.
pub fn derive_key(passphrase: &str, params: &KeyDerivationParams) -> Result<DerivedKey, CryptoError> {
    params.check_limits()?;

    let salt = STANDARD
        .decode(&params.salt)
        .map_err(|e| CryptoError::KeyDerivation(format!("invalid salt encoding: {}", e)))?;

    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(32), // Output length for AES-256
    )
    .map_err(|e| CryptoError::KeyDerivation(format!("invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = DerivedKey { key: [0u8; 32] };
    argon2
        .hash_password_into(passphrase.as_bytes(), &salt, &mut key.key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(key)
}
