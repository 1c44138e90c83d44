//! The save/load workflow around a profile being edited.

use tracing::{info, warn};

use crate::calculation::{compute_salary_with, validate_profile};
use crate::error::EngineResult;
use crate::models::{CompensationProfile, SalaryResult};
use crate::store::ProfileStore;

use super::{InteractionProvider, PackageTransport};

/// File name offered when the user is asked where to save.
pub const DEFAULT_FILE_NAME: &str = "gehaltspaket";

/// Holds the current profile and its result, and saves or loads them
/// through caller-supplied prompts and storage.
///
/// The result always matches the profile: every change goes through
/// [`PackageSession::update_profile`] or a successful
/// [`PackageSession::load`], both of which recompute it.
#[derive(Debug, Clone)]
pub struct PackageSession {
    store: ProfileStore,
    profile: CompensationProfile,
    result: SalaryResult,
}

impl PackageSession {
    /// Starts a session on the default profile.
    pub fn new(store: ProfileStore) -> Self {
        let profile = CompensationProfile::default();
        let result = compute_salary_with(&profile, store.schedule());
        Self {
            store,
            profile,
            result,
        }
    }

    /// The profile being edited.
    pub fn profile(&self) -> &CompensationProfile {
        &self.profile
    }

    /// The result for the current profile.
    pub fn result(&self) -> &SalaryResult {
        &self.result
    }

    /// Replaces the profile and recomputes the result.
    ///
    /// An invalid profile is rejected and the session is left as it was.
    pub fn update_profile(&mut self, profile: CompensationProfile) -> EngineResult<&SalaryResult> {
        validate_profile(&profile)?;
        self.result = compute_salary_with(&profile, self.store.schedule());
        self.profile = profile;
        Ok(&self.result)
    }

    /// Saves the current profile.
    ///
    /// Returns the file name written, or `None` if the user cancelled.
    pub fn save(
        &self,
        interaction: &mut impl InteractionProvider,
        transport: &mut impl PackageTransport,
    ) -> EngineResult<Option<String>> {
        let Some(file_name) = requested_name(interaction) else {
            return Ok(None);
        };
        let Some(passphrase) = interaction.request_passphrase() else {
            return Ok(None);
        };

        let envelope = self.store.save(&self.profile, &passphrase)?;
        transport.write(&file_name, envelope.as_bytes())?;

        info!(file_name = %file_name, "Saved salary package");
        Ok(Some(file_name))
    }

    /// Loads a profile, replacing the current one on success.
    ///
    /// A passphrase is only requested for sealed packages. Returns `false`
    /// if the user cancelled. On any error the session keeps its current
    /// profile and result.
    pub fn load(
        &mut self,
        interaction: &mut impl InteractionProvider,
        transport: &mut impl PackageTransport,
    ) -> EngineResult<bool> {
        let Some(file_name) = requested_name(interaction) else {
            return Ok(false);
        };

        let package = transport
            .read(&file_name)?
            .decode()
            .inspect_err(|e| warn!(file_name = %file_name, error = %e, "Unreadable package"))?;

        let passphrase = if package.is_sealed() {
            match interaction.request_passphrase() {
                Some(passphrase) => Some(passphrase),
                None => return Ok(false),
            }
        } else {
            None
        };

        let profile = self
            .store
            .open(package, passphrase.as_deref())
            .inspect_err(|e| warn!(file_name = %file_name, error = %e, "Failed to load package"))?;

        self.result = compute_salary_with(&profile, self.store.schedule());
        self.profile = profile;

        info!(file_name = %file_name, "Loaded salary package into session");
        Ok(true)
    }
}

impl Default for PackageSession {
    fn default() -> Self {
        Self::new(ProfileStore::default())
    }
}

fn requested_name(interaction: &mut impl InteractionProvider) -> Option<String> {
    interaction
        .request_file_name(DEFAULT_FILE_NAME)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}
