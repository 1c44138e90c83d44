//! The canonical package record.
//!
//! A [`PackageRecord`] is the plain JSON document the configurator has
//! always written. It is loaded as-is from legacy files and is also the
//! plaintext sealed inside an envelope.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::validate_profile;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationProfile, SalaryResult, TaxClass};

/// A saved salary package in its canonical text form.
///
/// Integer fields are kept wide so that out-of-range values surface as
/// validation errors rather than parse errors. They also accept whole JSON
/// floats such as `28.0`, which older files contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    /// Annual base salary.
    pub base_salary: Decimal,
    /// Vacation days per year.
    #[serde(deserialize_with = "whole_number")]
    pub vacation_days: i64,
    /// Weekly working hours.
    pub working_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Company car included.
    pub company_car: bool,
    /// Job bike included.
    pub job_bike: bool,
    /// Performance bonus.
    pub performance_bonus: Decimal,
    /// Tax class code.
    #[serde(deserialize_with = "whole_number")]
    pub selected_tax_class: i64,
    /// Net salary at save time, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_salary: Option<Decimal>,
    /// Tax amount at save time, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
}

/// Reads an integer, also accepting a float with no fractional part.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Integer(i64),
        Float(f64),
    }

    // Beyond 2^53 a float no longer holds every integer exactly.
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

    match Number::deserialize(deserializer)? {
        Number::Integer(value) => Ok(value),
        Number::Float(value) if value.fract() == 0.0 && value.abs() <= EXACT_LIMIT => {
            Ok(value as i64)
        }
        Number::Float(value) => Err(D::Error::custom(format!(
            "expected a whole number, got {}",
            value
        ))),
    }
}

impl PackageRecord {
    /// Builds the record for a profile and the result computed from it.
    pub fn new(profile: &CompensationProfile, result: &SalaryResult) -> Self {
        Self {
            base_salary: profile.base_salary,
            vacation_days: i64::from(profile.vacation_days),
            working_hours: profile.working_hours_per_week,
            overtime_hours: profile.overtime_hours,
            company_car: profile.has_company_car,
            job_bike: profile.has_job_bike,
            performance_bonus: profile.performance_bonus,
            selected_tax_class: i64::from(profile.tax_class),
            net_salary: Some(result.net_salary),
            tax_amount: Some(result.tax_amount),
        }
    }

    /// Reads a record from an already-parsed JSON value.
    ///
    /// Every profile field is required; a missing or mistyped field is a
    /// [`EngineError::Parse`].
    pub fn from_value(value: serde_json::Value) -> EngineResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| EngineError::parse(format!("invalid package record: {}", e)))
    }

    /// Serializes the record to compact JSON.
    pub fn to_json(&self) -> EngineResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| EngineError::encryption(format!("failed to serialize package: {}", e)))
    }

    /// Converts the record into a validated profile.
    ///
    /// The stored net salary and tax amount are ignored.
    pub fn into_profile(self) -> EngineResult<CompensationProfile> {
        let vacation_days = u32::try_from(self.vacation_days).map_err(|_| {
            EngineError::validation(
                "vacation_days",
                format!("must be a non-negative day count, got {}", self.vacation_days),
            )
        })?;
        let tax_class = TaxClass::try_from(self.selected_tax_class)?;

        let profile = CompensationProfile {
            base_salary: self.base_salary,
            vacation_days,
            working_hours_per_week: self.working_hours,
            overtime_hours: self.overtime_hours,
            performance_bonus: self.performance_bonus,
            has_company_car: self.company_car,
            has_job_bike: self.job_bike,
            tax_class,
        };
        validate_profile(&profile)?;

        Ok(profile)
    }
}
