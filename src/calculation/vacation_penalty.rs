//! Vacation penalty calculation.
//!
//! Vacation days above the number included in the base salary are deducted
//! at a flat amount per day.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, CompensationProfile};

/// The result of the vacation penalty rule, including the audit step.
#[derive(Debug, Clone)]
pub struct VacationPenaltyResult {
    /// The deduction for excess vacation days.
    pub penalty: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the deduction for vacation days above the included allowance.
///
/// `max(0, vacation_days - included_days) * penalty_per_day`
///
/// # Examples
///
/// ```
/// use salary_package::calculation::calculate_vacation_penalty;
/// use salary_package::config::TaxSchedule;
/// use salary_package::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile { vacation_days: 35, ..Default::default() };
/// let result = calculate_vacation_penalty(&profile, &TaxSchedule::default(), 1);
/// assert_eq!(result.penalty, Decimal::from(750));
/// ```
pub fn calculate_vacation_penalty(
    profile: &CompensationProfile,
    schedule: &TaxSchedule,
    step_number: u32,
) -> VacationPenaltyResult {
    let rules = &schedule.adjustments().vacation;
    let excess_days = profile.vacation_days.saturating_sub(rules.included_days);
    let penalty = Decimal::from(excess_days) * rules.penalty_per_day;

    let reasoning = if excess_days > 0 {
        format!(
            "{} days above the {} included days x {} = {}",
            excess_days,
            rules.included_days,
            rules.penalty_per_day.normalize(),
            penalty.normalize()
        )
    } else {
        format!(
            "{} vacation days are within the {} included days",
            profile.vacation_days, rules.included_days
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_penalty".to_string(),
        rule_name: "Vacation Penalty".to_string(),
        input: serde_json::json!({
            "vacation_days": profile.vacation_days,
            "included_days": rules.included_days,
            "penalty_per_day": rules.penalty_per_day.normalize().to_string()
        }),
        output: serde_json::json!({
            "excess_days": excess_days,
            "vacation_penalty": penalty.normalize().to_string()
        }),
        reasoning,
    };

    VacationPenaltyResult {
        penalty,
        audit_step,
    }
}
