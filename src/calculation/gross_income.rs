//! Adjusted gross income.
//!
//! Combines the base salary with the vacation, hours and overtime
//! adjustments, the performance bonus, and the taxable value of company
//! benefits. Benefits raise the taxable base; they are never deducted from
//! net pay directly.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, AuditWarning, CompensationProfile};

/// Adjustments already derived from the profile, in currency.
#[derive(Debug, Clone, Copy)]
pub struct SalaryAdjustments {
    /// Deduction for excess vacation days.
    pub vacation_penalty: Decimal,
    /// Deduction for part-time hours.
    pub hours_penalty: Decimal,
    /// Bonus for extra weekly hours.
    pub extra_hours_bonus: Decimal,
    /// Payment for overtime hours.
    pub overtime_bonus: Decimal,
}

/// The result of the benefits rule.
#[derive(Debug, Clone)]
pub struct BenefitsValueResult {
    /// Annual taxable value of company car and job bike.
    pub value: Decimal,
    /// Set when a benefit is present.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the adjusted gross rule.
#[derive(Debug, Clone)]
pub struct GrossAdjustedResult {
    /// Gross income after adjustments and benefits.
    pub gross_adjusted: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the annual taxable value of the company car and job bike.
pub fn calculate_benefits_value(
    profile: &CompensationProfile,
    schedule: &TaxSchedule,
    step_number: u32,
) -> BenefitsValueResult {
    let rules = &schedule.adjustments().benefits;
    let months = Decimal::from(rules.months_per_year);

    let company_car = if profile.has_company_car {
        rules.company_car_monthly * months
    } else {
        Decimal::ZERO
    };
    let job_bike = if profile.has_job_bike {
        rules.job_bike_monthly * months
    } else {
        Decimal::ZERO
    };
    let value = company_car + job_bike;

    let warning = (profile.has_company_car || profile.has_job_bike).then(|| AuditWarning {
        code: "BENEFIT_TAXED_AS_INCOME".to_string(),
        message: format!(
            "Benefits worth {} are added to taxable income and reduce net pay only through tax",
            value.normalize()
        ),
        severity: "low".to_string(),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "benefits_value".to_string(),
        rule_name: "Taxable Benefits".to_string(),
        input: serde_json::json!({
            "has_company_car": profile.has_company_car,
            "has_job_bike": profile.has_job_bike,
            "company_car_monthly": rules.company_car_monthly.normalize().to_string(),
            "job_bike_monthly": rules.job_bike_monthly.normalize().to_string(),
            "months_per_year": rules.months_per_year
        }),
        output: serde_json::json!({
            "company_car_value": company_car.normalize().to_string(),
            "job_bike_value": job_bike.normalize().to_string(),
            "benefits_value": value.normalize().to_string()
        }),
        reasoning: format!(
            "Company car {} + job bike {} = {}",
            company_car.normalize(),
            job_bike.normalize(),
            value.normalize()
        ),
    };

    BenefitsValueResult {
        value,
        warning,
        audit_step,
    }
}

/// Sums base salary, adjustments, bonus and benefits into adjusted gross.
///
/// `base - vacation - hours + extra + overtime + bonus + benefits`
pub fn calculate_gross_adjusted(
    profile: &CompensationProfile,
    adjustments: &SalaryAdjustments,
    benefits_value: Decimal,
    step_number: u32,
) -> GrossAdjustedResult {
    let gross_adjusted = profile.base_salary
        - adjustments.vacation_penalty
        - adjustments.hours_penalty
        + adjustments.extra_hours_bonus
        + adjustments.overtime_bonus
        + profile.performance_bonus
        + benefits_value;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_adjusted".to_string(),
        rule_name: "Adjusted Gross Income".to_string(),
        input: serde_json::json!({
            "base_salary": profile.base_salary.normalize().to_string(),
            "vacation_penalty": adjustments.vacation_penalty.normalize().to_string(),
            "hours_penalty": adjustments.hours_penalty.normalize().to_string(),
            "extra_hours_bonus": adjustments.extra_hours_bonus.normalize().to_string(),
            "overtime_bonus": adjustments.overtime_bonus.normalize().to_string(),
            "performance_bonus": profile.performance_bonus.normalize().to_string(),
            "benefits_value": benefits_value.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_adjusted": gross_adjusted.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} - {} + {} + {} + {} + {} = {}",
            profile.base_salary.normalize(),
            adjustments.vacation_penalty.normalize(),
            adjustments.hours_penalty.normalize(),
            adjustments.extra_hours_bonus.normalize(),
            adjustments.overtime_bonus.normalize(),
            profile.performance_bonus.normalize(),
            benefits_value.normalize(),
            gross_adjusted.normalize()
        ),
    };

    GrossAdjustedResult {
        gross_adjusted,
        audit_step,
    }
}
