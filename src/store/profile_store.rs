//! Passphrase-protected save and load of compensation profiles.

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{SubsecRound, Utc};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::calculation::{compute_salary_with, validate_profile};
use crate::config::TaxSchedule;
use crate::crypto::{CryptoError, KeyDerivationParams, decrypt, derive_key, encrypt};
use crate::error::{EngineError, EngineResult};
use crate::models::CompensationProfile;

use super::{
    DecodedPackage, ENVELOPE_VERSION, EncryptedEnvelope, EnvelopeDocument, EnvelopeHeader,
    PackagePayload, PackageRecord,
};

/// Seals profiles into encrypted envelopes and opens them again.
///
/// The store holds no per-package state: the schedule is used to compute the
/// display figures written alongside a profile, and the KDF costs are the
/// template for each new envelope's salt.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    schedule: TaxSchedule,
    kdf: KeyDerivationParams,
}

impl ProfileStore {
    /// Creates a store with the built-in schedule and default KDF costs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `schedule` for the figures stored with each package.
    pub fn with_schedule(mut self, schedule: TaxSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Overrides the Argon2id costs used for new envelopes.
    pub fn with_kdf_costs(mut self, memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        self.kdf = KeyDerivationParams::with_costs(memory_cost, time_cost, parallelism);
        self
    }

    /// The schedule this store computes with.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Seals `profile` under `passphrase`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Encryption`] for an empty passphrase or a key
    /// derivation failure, and [`EngineError::Validation`] if the profile is
    /// out of range.
    pub fn save(
        &self,
        profile: &CompensationProfile,
        passphrase: &str,
    ) -> EngineResult<EncryptedEnvelope> {
        if passphrase.is_empty() {
            return Err(EngineError::encryption("passphrase must not be empty"));
        }
        validate_profile(profile)?;

        let result = compute_salary_with(profile, &self.schedule);
        let plaintext = Zeroizing::new(PackageRecord::new(profile, &result).to_json()?);

        let header = EnvelopeHeader {
            version: ENVELOPE_VERSION,
            saved_at: Utc::now().trunc_subsecs(0),
            kdf: self.kdf.with_fresh_salt(),
        };
        let aad = header.associated_data()?;

        let key = derive_key(passphrase, &header.kdf).map_err(seal_error)?;
        let sealed = encrypt(&plaintext, &aad, &key).map_err(seal_error)?;

        let document = EnvelopeDocument {
            header,
            nonce: STANDARD.encode(sealed.nonce),
            ciphertext: STANDARD.encode(&sealed.ciphertext),
        };
        let envelope = EncryptedEnvelope::from_document(&document)?;

        info!(
            net_salary = %result.net_salary,
            bytes = envelope.as_bytes().len(),
            "Sealed salary package"
        );

        Ok(envelope)
    }

    /// Decodes, decrypts, parses and validates a saved package.
    ///
    /// Legacy plain records load without using the passphrase.
    ///
    /// # Errors
    ///
    /// [`EngineError::Parse`] for content that is not a package,
    /// [`EngineError::Decryption`] for a wrong passphrase or a damaged
    /// envelope, [`EngineError::Validation`] for out-of-range values.
    pub fn load(
        &self,
        payload: impl Into<PackagePayload>,
        passphrase: &str,
    ) -> EngineResult<CompensationProfile> {
        let decoded = payload.into().decode()?;
        self.open(decoded, Some(passphrase))
    }

    /// Opens an already-decoded package.
    ///
    /// `passphrase` is only consulted for sealed packages; a sealed package
    /// with no passphrase is a [`EngineError::Decryption`].
    pub fn open(
        &self,
        package: DecodedPackage,
        passphrase: Option<&str>,
    ) -> EngineResult<CompensationProfile> {
        let (record, kind) = match package {
            DecodedPackage::Sealed(document) => (self.unseal(document, passphrase)?, "sealed"),
            DecodedPackage::Legacy(record) => (record, "legacy"),
        };

        let stored_net = record.net_salary;
        let stored_tax = record.tax_amount;
        let profile = record.into_profile().inspect_err(|e| {
            warn!(kind, error = %e, "Rejected salary package");
        })?;

        let result = compute_salary_with(&profile, &self.schedule);
        let net_stale = stored_net.is_some_and(|net| net != result.net_salary);
        let tax_stale = stored_tax.is_some_and(|tax| tax != result.tax_amount);
        if net_stale || tax_stale {
            warn!(
                kind,
                stored_net = ?stored_net,
                stored_tax = ?stored_tax,
                net_salary = %result.net_salary,
                tax_amount = %result.tax_amount,
                "Stored figures differ from recomputed result"
            );
        }

        info!(kind, "Loaded salary package");
        Ok(profile)
    }

    fn unseal(
        &self,
        document: EnvelopeDocument,
        passphrase: Option<&str>,
    ) -> EngineResult<PackageRecord> {
        let header = document.header;
        if header.version != ENVELOPE_VERSION {
            return Err(EngineError::decryption(format!(
                "unsupported envelope version {}",
                header.version
            )));
        }

        let passphrase = passphrase
            .filter(|p| !p.is_empty())
            .ok_or_else(|| EngineError::decryption("a passphrase is required"))?;

        let nonce = STANDARD
            .decode(&document.nonce)
            .map_err(|e| EngineError::decryption(format!("invalid nonce encoding: {}", e)))?;
        let ciphertext = STANDARD
            .decode(&document.ciphertext)
            .map_err(|e| EngineError::decryption(format!("invalid ciphertext encoding: {}", e)))?;

        let aad = header
            .associated_data()
            .map_err(|e| EngineError::decryption(e.to_string()))?;
        let key = derive_key(passphrase, &header.kdf).map_err(open_error)?;
        let plaintext = decrypt(&nonce, &ciphertext, &aad, &key).map_err(open_error)?;

        let value: serde_json::Value = serde_json::from_slice(&plaintext).map_err(|e| {
            EngineError::decryption(format!("decrypted content is not JSON: {}", e))
        })?;

        PackageRecord::from_value(value)
    }
}

fn seal_error(error: CryptoError) -> EngineError {
    EngineError::encryption(error.to_string())
}

fn open_error(error: CryptoError) -> EngineError {
    EngineError::decryption(error.to_string())
}
