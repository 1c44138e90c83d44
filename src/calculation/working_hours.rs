//! Working hour adjustments.
//!
//! Fewer weekly hours than the standard reduce the salary; more weekly hours
//! earn an extra hours bonus. At most one of the two is non-zero.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, CompensationProfile};

/// The result of the hours penalty rule.
#[derive(Debug, Clone)]
pub struct HoursPenaltyResult {
    /// The deduction for working below the standard hours.
    pub penalty: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of the extra hours bonus rule.
#[derive(Debug, Clone)]
pub struct ExtraHoursBonusResult {
    /// The bonus for working above the standard hours.
    pub bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the deduction for working fewer than the standard weekly hours.
///
/// `(standard - hours) * (base_salary / standard)` when `hours < standard`.
/// Zero hours yields a penalty equal to the whole base salary.
///
/// # Examples
///
/// ```
/// use salary_package::calculation::calculate_hours_penalty;
/// use salary_package::config::TaxSchedule;
/// use salary_package::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     working_hours_per_week: Decimal::from(39),
///     ..Default::default()
/// };
/// let result = calculate_hours_penalty(&profile, &TaxSchedule::default(), 2);
/// assert_eq!(result.penalty, Decimal::from(1000));
/// ```
pub fn calculate_hours_penalty(
    profile: &CompensationProfile,
    schedule: &TaxSchedule,
    step_number: u32,
) -> HoursPenaltyResult {
    let standard = schedule.adjustments().working_hours.standard_weekly_hours;
    let hours = profile.working_hours_per_week;

    let (penalty, reasoning) = if hours < standard {
        let per_hour = profile
            .base_salary
            .checked_div(standard)
            .unwrap_or(Decimal::ZERO);
        let penalty = (standard - hours) * per_hour;
        (
            penalty,
            format!(
                "({} - {}) hours x ({} / {}) = {}",
                standard.normalize(),
                hours.normalize(),
                profile.base_salary.normalize(),
                standard.normalize(),
                penalty.normalize()
            ),
        )
    } else {
        (
            Decimal::ZERO,
            format!(
                "No hours penalty - {} hours is not below the standard {}",
                hours.normalize(),
                standard.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hours_penalty".to_string(),
        rule_name: "Part-Time Hours Penalty".to_string(),
        input: serde_json::json!({
            "working_hours_per_week": hours.normalize().to_string(),
            "standard_weekly_hours": standard.normalize().to_string(),
            "base_salary": profile.base_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "hours_penalty": penalty.normalize().to_string()
        }),
        reasoning,
    };

    HoursPenaltyResult {
        penalty,
        audit_step,
    }
}

/// Calculates the bonus for working more than the standard weekly hours.
///
/// `(hours - standard) * (base_salary / monthly_hours)` when `hours > standard`.
pub fn calculate_extra_hours_bonus(
    profile: &CompensationProfile,
    schedule: &TaxSchedule,
    step_number: u32,
) -> ExtraHoursBonusResult {
    let rules = &schedule.adjustments().working_hours;
    let hours = profile.working_hours_per_week;

    let (bonus, reasoning) = if hours > rules.standard_weekly_hours {
        let per_hour = profile
            .base_salary
            .checked_div(rules.monthly_hours)
            .unwrap_or(Decimal::ZERO);
        let bonus = (hours - rules.standard_weekly_hours) * per_hour;
        (
            bonus,
            format!(
                "({} - {}) hours x ({} / {}) = {}",
                hours.normalize(),
                rules.standard_weekly_hours.normalize(),
                profile.base_salary.normalize(),
                rules.monthly_hours.normalize(),
                bonus.normalize()
            ),
        )
    } else {
        (
            Decimal::ZERO,
            format!(
                "No extra hours bonus - {} hours is not above the standard {}",
                hours.normalize(),
                rules.standard_weekly_hours.normalize()
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "extra_hours_bonus".to_string(),
        rule_name: "Extra Hours Bonus".to_string(),
        input: serde_json::json!({
            "working_hours_per_week": hours.normalize().to_string(),
            "standard_weekly_hours": rules.standard_weekly_hours.normalize().to_string(),
            "monthly_hours": rules.monthly_hours.normalize().to_string(),
            "base_salary": profile.base_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "extra_hours_bonus": bonus.normalize().to_string()
        }),
        reasoning,
    };

    ExtraHoursBonusResult { bonus, audit_step }
}
