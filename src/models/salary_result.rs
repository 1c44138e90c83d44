//! Salary result models.
//!
//! This module contains the [`SalaryResult`] type and the audit structures
//! that record how each derived amount was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate inputs that are accepted but worth pointing out to the
/// person configuring the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Holds no timing data so that repeated calculations compare equal.
///
/// # Example
///
/// ```
/// use salary_package::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warning("ZERO_WORKING_HOURS"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Returns the step recorded for `rule_id`, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete result of a salary calculation.
///
/// Every field is derived from the profile and the tax schedule; the result
/// is never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Deduction for vacation days above the included allowance.
    pub vacation_penalty: Decimal,
    /// Deduction for working fewer than the standard weekly hours.
    pub hours_penalty: Decimal,
    /// Bonus for working more than the standard weekly hours.
    pub extra_hours_bonus: Decimal,
    /// Payment for overtime hours.
    pub overtime_bonus: Decimal,
    /// Taxable value of company car and job bike.
    pub benefits_value: Decimal,
    /// Gross income after all adjustments and benefits.
    pub gross_adjusted: Decimal,
    /// Allowance granted by the tax class.
    pub tax_free_amount: Decimal,
    /// Income subject to tax.
    pub taxable_income: Decimal,
    /// Rate applied to the whole taxable income.
    pub tax_rate: Decimal,
    /// Tax withheld, rounded to whole currency units.
    pub tax_amount: Decimal,
    /// Net salary, rounded to whole currency units.
    pub net_salary: Decimal,
    /// How each amount was derived.
    pub audit: AuditTrace,
}
