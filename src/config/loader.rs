//! Configuration loading functionality.
//!
//! This module provides the [`ScheduleLoader`] type for loading tax
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{Adjustments, ScheduleMetadata, TaxSchedule, TaxTable};

/// Loads a tax schedule from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/de_2025/
/// ├── schedule.yaml     # Schedule metadata
/// ├── tax.yaml          # Tax-free amounts and rate brackets
/// └── adjustments.yaml  # Vacation, hours, overtime and benefit rules
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_package::config::ScheduleLoader;
///
/// let loader = ScheduleLoader::load("./config/de_2025")?;
/// println!("Loaded schedule: {}", loader.metadata().name);
/// # Ok::<(), salary_package::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    schedule: TaxSchedule,
}

impl ScheduleLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// declares a malformed bracket table.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxTable>(&tax_path)?;
        tax.check_brackets()
            .map_err(|message| EngineError::ConfigParseError {
                path: tax_path.display().to_string(),
                message,
            })?;

        let adjustments = Self::load_yaml::<Adjustments>(&path.join("adjustments.yaml"))?;

        tracing::debug!(
            code = %metadata.code,
            version = %metadata.version,
            "Loaded tax schedule"
        );

        Ok(Self {
            schedule: TaxSchedule::new(metadata, tax, adjustments),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Consumes the loader, returning the schedule.
    pub fn into_schedule(self) -> TaxSchedule {
        self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}
