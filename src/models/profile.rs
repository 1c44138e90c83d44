//! Compensation profile model and related types.
//!
//! This module defines the [`CompensationProfile`] a caller edits during a
//! session and the [`TaxClass`] selector that controls the tax-free allowance.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// German payroll tax class (Steuerklasse).
///
/// Serialized as its numeric code (1 to 6).
///
/// # Example
///
/// ```
/// use salary_package::models::TaxClass;
///
/// assert_eq!(TaxClass::try_from(3_i64).unwrap(), TaxClass::III);
/// assert!(TaxClass::try_from(7_i64).is_err());
/// assert_eq!(TaxClass::from_code_or_default(7), TaxClass::I);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum TaxClass {
    /// Single, no children.
    #[default]
    I,
    /// Single parent.
    II,
    /// Married, higher earner of the couple.
    III,
    /// Married, both partners earning similar amounts.
    IV,
    /// Married, lower earner paired with class III.
    V,
    /// Second and further employments.
    VI,
}

impl TaxClass {
    /// All tax classes in code order.
    pub const ALL: [TaxClass; 6] = [
        TaxClass::I,
        TaxClass::II,
        TaxClass::III,
        TaxClass::IV,
        TaxClass::V,
        TaxClass::VI,
    ];

    /// Returns the numeric code of this class.
    pub fn code(self) -> u8 {
        match self {
            TaxClass::I => 1,
            TaxClass::II => 2,
            TaxClass::III => 3,
            TaxClass::IV => 4,
            TaxClass::V => 5,
            TaxClass::VI => 6,
        }
    }

    /// Maps a code to a class, treating anything unrecognized as class I.
    pub fn from_code_or_default(code: i64) -> Self {
        Self::try_from(code).unwrap_or_default()
    }
}

impl TryFrom<i64> for TaxClass {
    type Error = EngineError;

    fn try_from(code: i64) -> EngineResult<Self> {
        match code {
            1 => Ok(TaxClass::I),
            2 => Ok(TaxClass::II),
            3 => Ok(TaxClass::III),
            4 => Ok(TaxClass::IV),
            5 => Ok(TaxClass::V),
            6 => Ok(TaxClass::VI),
            other => Err(EngineError::validation(
                "tax_class",
                format!("unknown tax class {}, expected 1 to 6", other),
            )),
        }
    }
}

impl From<TaxClass> for i64 {
    fn from(class: TaxClass) -> Self {
        i64::from(class.code())
    }
}

impl fmt::Display for TaxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The compensation parameters a caller configures.
///
/// Amounts are annual and in whole currency units. The calculator accepts any
/// values; use [`crate::calculation::validate_profile`] at the boundary to
/// reject negative inputs before computing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationProfile {
    /// Annual base salary.
    pub base_salary: Decimal,
    /// Vacation days per year.
    pub vacation_days: u32,
    /// Contracted working hours per week.
    pub working_hours_per_week: Decimal,
    /// Overtime hours paid out.
    pub overtime_hours: Decimal,
    /// Performance bonus paid on top of the base salary.
    pub performance_bonus: Decimal,
    /// Whether a company car is part of the package.
    pub has_company_car: bool,
    /// Whether a job bike is part of the package.
    pub has_job_bike: bool,
    /// The payroll tax class.
    pub tax_class: TaxClass,
}

impl Default for CompensationProfile {
    fn default() -> Self {
        Self {
            base_salary: Decimal::from(40000),
            vacation_days: 28,
            working_hours_per_week: Decimal::from(40),
            overtime_hours: Decimal::ZERO,
            performance_bonus: Decimal::ZERO,
            has_company_car: false,
            has_job_bike: false,
            tax_class: TaxClass::I,
        }
    }
}
