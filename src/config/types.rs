//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed schedule structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::TaxClass;

/// Metadata about the tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier of the schedule (e.g., "DE-2025").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// ISO currency code of all amounts.
    pub currency: String,
}

/// One step of the progressive rate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateBracket {
    /// Inclusive upper income limit; `None` for the open top bracket.
    pub up_to: Option<Decimal>,
    /// The rate applied to the whole taxable income.
    pub rate: Decimal,
}

/// Tax configuration from tax.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxTable {
    /// Tax-free allowance per tax class code.
    pub tax_free_amounts: BTreeMap<u8, Decimal>,
    /// Allowance used for a class with no entry in `tax_free_amounts`.
    pub fallback_tax_free_amount: Decimal,
    /// Rate brackets ordered by ascending limit.
    pub brackets: Vec<RateBracket>,
}

impl TaxTable {
    /// Checks that brackets are non-empty, strictly ascending, and end with
    /// an open bracket.
    pub fn check_brackets(&self) -> Result<(), String> {
        let Some(last) = self.brackets.last() else {
            return Err("at least one rate bracket is required".to_string());
        };
        if last.up_to.is_some() {
            return Err("the last rate bracket must not have an upper limit".to_string());
        }

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in self.brackets[..self.brackets.len() - 1].iter().enumerate() {
            let Some(limit) = bracket.up_to else {
                return Err(format!(
                    "rate bracket {} has no upper limit but is not the last bracket",
                    index + 1
                ));
            };
            if previous.is_some_and(|p| limit <= p) {
                return Err(format!(
                    "rate bracket {} limit {} is not above the previous limit",
                    index + 1,
                    limit
                ));
            }
            previous = Some(limit);
        }

        Ok(())
    }
}

/// Vacation rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VacationRules {
    /// Vacation days included in the base salary.
    pub included_days: u32,
    /// Deduction per day above `included_days`.
    pub penalty_per_day: Decimal,
}

/// Working hour rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkingHoursRules {
    /// Standard weekly hours; fewer hours are penalized, more are paid extra.
    pub standard_weekly_hours: Decimal,
    /// Divisor for the extra hours bonus (monthly hours).
    pub monthly_hours: Decimal,
}

/// Overtime rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeRules {
    /// Payment per overtime hour.
    pub hourly_rate: Decimal,
}

/// Taxable benefit values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenefitRules {
    /// Monthly taxable value of a company car.
    pub company_car_monthly: Decimal,
    /// Monthly taxable value of a job bike.
    pub job_bike_monthly: Decimal,
    /// Months per year the benefits are counted for.
    pub months_per_year: u32,
}

/// Adjustment configuration from adjustments.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Adjustments {
    /// Vacation rules.
    pub vacation: VacationRules,
    /// Working hour rules.
    pub working_hours: WorkingHoursRules,
    /// Overtime rules.
    pub overtime: OvertimeRules,
    /// Benefit rules.
    pub benefits: BenefitRules,
}

/// The complete schedule the calculator is parameterized by.
///
/// [`TaxSchedule::default`] holds the built-in figures; a schedule loaded
/// with [`crate::config::ScheduleLoader`] from `config/de_2025` is identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    metadata: ScheduleMetadata,
    tax: TaxTable,
    adjustments: Adjustments,
}

impl TaxSchedule {
    /// Creates a new TaxSchedule from its component parts.
    pub fn new(metadata: ScheduleMetadata, tax: TaxTable, adjustments: Adjustments) -> Self {
        Self {
            metadata,
            tax,
            adjustments,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the tax table.
    pub fn tax(&self) -> &TaxTable {
        &self.tax
    }

    /// Returns the adjustment rules.
    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Returns the tax-free allowance for a class, falling back to the
    /// configured fallback amount when the class has no entry.
    pub fn tax_free_amount(&self, class: TaxClass) -> Decimal {
        self.tax
            .tax_free_amounts
            .get(&class.code())
            .copied()
            .unwrap_or(self.tax.fallback_tax_free_amount)
    }

    /// Looks up the single rate for an income.
    pub fn rate_for(&self, income: Decimal) -> Decimal {
        self.tax
            .brackets
            .iter()
            .find(|b| b.up_to.is_none_or(|limit| income <= limit))
            .or(self.tax.brackets.last())
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        let bracket = |up_to: Option<i64>, rate: Decimal| RateBracket {
            up_to: up_to.map(Decimal::from),
            rate,
        };

        let metadata = ScheduleMetadata {
            code: "DE-2025".to_string(),
            name: "German payroll tax estimate".to_string(),
            version: "2025-01-01".to_string(),
            currency: "EUR".to_string(),
        };

        let tax = TaxTable {
            tax_free_amounts: BTreeMap::from([
                (1, Decimal::from(10908)),
                (2, Decimal::from(15168)),
                (3, Decimal::from(21000)),
                (4, Decimal::from(10908)),
                (5, Decimal::ZERO),
                (6, Decimal::ZERO),
            ]),
            fallback_tax_free_amount: Decimal::from(10908),
            brackets: vec![
                bracket(Some(10908), Decimal::ZERO),
                bracket(Some(16000), Decimal::new(14, 2)),
                bracket(Some(31000), Decimal::new(24, 2)),
                bracket(Some(60000), Decimal::new(32, 2)),
                bracket(Some(90000), Decimal::new(42, 2)),
                bracket(None, Decimal::new(45, 2)),
            ],
        };

        let adjustments = Adjustments {
            vacation: VacationRules {
                included_days: 30,
                penalty_per_day: Decimal::from(150),
            },
            working_hours: WorkingHoursRules {
                standard_weekly_hours: Decimal::from(40),
                monthly_hours: Decimal::from(160),
            },
            overtime: OvertimeRules {
                hourly_rate: Decimal::from(30),
            },
            benefits: BenefitRules {
                company_car_monthly: Decimal::from(500),
                job_bike_monthly: Decimal::from(50),
                months_per_year: 12,
            },
        };

        Self::new(metadata, tax, adjustments)
    }
}
