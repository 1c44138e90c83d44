//! Income tax calculation.
//!
//! The tax class decides the tax-free allowance. The rate comes from a
//! progressive lookup on adjusted gross income (before the allowance is
//! deducted) and is applied as a single flat rate to the whole taxable
//! income. This is not a cumulative bracket integral.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, TaxClass};

use super::round_currency;

/// The result of the income tax rules, including one audit step per rule.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// Allowance granted by the tax class.
    pub tax_free_amount: Decimal,
    /// `max(0, gross_adjusted - tax_free_amount)`.
    pub taxable_income: Decimal,
    /// Rate looked up on adjusted gross income.
    pub tax_rate: Decimal,
    /// `round(taxable_income * tax_rate)`.
    pub tax_amount: Decimal,
    /// Audit steps for allowance, rate and tax amount, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the income tax on an adjusted gross income.
///
/// # Arguments
///
/// * `gross_adjusted` - Adjusted gross income, benefits included
/// * `tax_class` - The employee's tax class
/// * `schedule` - The tax schedule to use
/// * `first_step_number` - Step number of the first of the three audit steps
///
/// # Examples
///
/// ```
/// use salary_package::calculation::calculate_income_tax;
/// use salary_package::config::TaxSchedule;
/// use salary_package::models::TaxClass;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_income_tax(
///     Decimal::from(40000),
///     TaxClass::I,
///     &TaxSchedule::default(),
///     7,
/// );
/// assert_eq!(result.taxable_income, Decimal::from(29092));
/// assert_eq!(result.tax_rate, Decimal::from_str("0.32").unwrap());
/// assert_eq!(result.tax_amount, Decimal::from(9309));
/// ```
pub fn calculate_income_tax(
    gross_adjusted: Decimal,
    tax_class: TaxClass,
    schedule: &TaxSchedule,
    first_step_number: u32,
) -> IncomeTaxResult {
    let tax_free_amount = schedule.tax_free_amount(tax_class);
    let taxable_income = (gross_adjusted - tax_free_amount).max(Decimal::ZERO);
    let tax_rate = schedule.rate_for(gross_adjusted);
    let unrounded = taxable_income * tax_rate;
    let tax_amount = round_currency(unrounded);

    let allowance_step = AuditStep {
        step_number: first_step_number,
        rule_id: "tax_free_amount".to_string(),
        rule_name: "Tax-Free Allowance".to_string(),
        input: serde_json::json!({
            "tax_class": tax_class.code(),
            "gross_adjusted": gross_adjusted.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_free_amount": tax_free_amount.normalize().to_string(),
            "taxable_income": taxable_income.normalize().to_string()
        }),
        reasoning: format!(
            "Tax class {} allowance {}; max(0, {} - {}) = {}",
            tax_class,
            tax_free_amount.normalize(),
            gross_adjusted.normalize(),
            tax_free_amount.normalize(),
            taxable_income.normalize()
        ),
    };

    let rate_step = AuditStep {
        step_number: first_step_number + 1,
        rule_id: "tax_rate".to_string(),
        rule_name: "Progressive Rate Lookup".to_string(),
        input: serde_json::json!({
            "gross_adjusted": gross_adjusted.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_rate": tax_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Adjusted gross {} falls in the {} bracket",
            gross_adjusted.normalize(),
            tax_rate.normalize()
        ),
    };

    let tax_step = AuditStep {
        step_number: first_step_number + 2,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
            "tax_rate": tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "tax_amount": tax_amount.normalize().to_string()
        }),
        reasoning: format!(
            "round({} x {}) = round({}) = {}",
            taxable_income.normalize(),
            tax_rate.normalize(),
            unrounded.normalize(),
            tax_amount.normalize()
        ),
    };

    IncomeTaxResult {
        tax_free_amount,
        taxable_income,
        tax_rate,
        tax_amount,
        audit_steps: vec![allowance_step, rate_step, tax_step],
    }
}
