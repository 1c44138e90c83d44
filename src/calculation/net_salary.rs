//! Net salary calculation.
//!
//! Runs every rule in a fixed order and assembles the [`SalaryResult`]. The
//! whole result is computed before the call returns; no field is filled in
//! later.

use crate::config::TaxSchedule;
use crate::models::{AuditStep, AuditTrace, AuditWarning, CompensationProfile, SalaryResult};

use super::{
    SalaryAdjustments, calculate_benefits_value, calculate_extra_hours_bonus,
    calculate_gross_adjusted, calculate_hours_penalty, calculate_income_tax,
    calculate_overtime_bonus, calculate_vacation_penalty, round_currency,
};

/// Computes the salary result with the built-in tax schedule.
///
/// # Examples
///
/// ```
/// use salary_package::calculation::compute_salary;
/// use salary_package::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let result = compute_salary(&CompensationProfile::default());
/// assert_eq!(result.tax_amount, Decimal::from(9309));
/// assert_eq!(result.net_salary, Decimal::from(30691));
/// ```
pub fn compute_salary(profile: &CompensationProfile) -> SalaryResult {
    compute_salary_with(profile, &TaxSchedule::default())
}

/// Computes the salary result with the given tax schedule.
///
/// The derivation order is fixed: vacation penalty, hours penalty, extra
/// hours bonus, overtime bonus, benefits, adjusted gross, tax-free amount,
/// rate, tax, net salary.
pub fn compute_salary_with(profile: &CompensationProfile, schedule: &TaxSchedule) -> SalaryResult {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(10);
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let vacation = calculate_vacation_penalty(profile, schedule, 1);
    steps.push(vacation.audit_step);

    let hours = calculate_hours_penalty(profile, schedule, 2);
    steps.push(hours.audit_step);

    if profile.working_hours_per_week.is_zero() {
        warnings.push(AuditWarning {
            code: "ZERO_WORKING_HOURS".to_string(),
            message: "Zero weekly working hours; the hours penalty equals the base salary"
                .to_string(),
            severity: "medium".to_string(),
        });
    }

    let extra_hours = calculate_extra_hours_bonus(profile, schedule, 3);
    steps.push(extra_hours.audit_step);

    let overtime = calculate_overtime_bonus(profile, schedule, 4);
    steps.push(overtime.audit_step);

    let benefits = calculate_benefits_value(profile, schedule, 5);
    steps.push(benefits.audit_step);
    warnings.extend(benefits.warning);

    let adjustments = SalaryAdjustments {
        vacation_penalty: vacation.penalty,
        hours_penalty: hours.penalty,
        extra_hours_bonus: extra_hours.bonus,
        overtime_bonus: overtime.bonus,
    };
    let gross = calculate_gross_adjusted(profile, &adjustments, benefits.value, 6);
    steps.push(gross.audit_step);

    let tax = calculate_income_tax(gross.gross_adjusted, profile.tax_class, schedule, 7);
    steps.extend(tax.audit_steps);

    let net_salary = round_currency(gross.gross_adjusted - tax.tax_amount);
    steps.push(AuditStep {
        step_number: 10,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "gross_adjusted": gross.gross_adjusted.normalize().to_string(),
            "tax_amount": tax.tax_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "round({} - {}) = {}",
            gross.gross_adjusted.normalize(),
            tax.tax_amount.normalize(),
            net_salary.normalize()
        ),
    });

    tracing::debug!(
        gross_adjusted = %gross.gross_adjusted,
        tax_amount = %tax.tax_amount,
        net_salary = %net_salary,
        "Computed salary"
    );

    SalaryResult {
        vacation_penalty: adjustments.vacation_penalty,
        hours_penalty: adjustments.hours_penalty,
        extra_hours_bonus: adjustments.extra_hours_bonus,
        overtime_bonus: adjustments.overtime_bonus,
        benefits_value: benefits.value,
        gross_adjusted: gross.gross_adjusted,
        tax_free_amount: tax.tax_free_amount,
        taxable_income: tax.taxable_income,
        tax_rate: tax.tax_rate,
        tax_amount: tax.tax_amount,
        net_salary,
        audit: AuditTrace { steps, warnings },
    }
}
