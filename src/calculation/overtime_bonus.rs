//! Overtime bonus calculation.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::{AuditStep, CompensationProfile};

/// The result of the overtime bonus rule.
#[derive(Debug, Clone)]
pub struct OvertimeBonusResult {
    /// The payment for overtime hours.
    pub bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays every overtime hour at the configured flat hourly rate.
pub fn calculate_overtime_bonus(
    profile: &CompensationProfile,
    schedule: &TaxSchedule,
    step_number: u32,
) -> OvertimeBonusResult {
    let rate = schedule.adjustments().overtime.hourly_rate;
    let bonus = profile.overtime_hours * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_bonus".to_string(),
        rule_name: "Overtime Bonus".to_string(),
        input: serde_json::json!({
            "overtime_hours": profile.overtime_hours.normalize().to_string(),
            "hourly_rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_bonus": bonus.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours x {} = {}",
            profile.overtime_hours.normalize(),
            rate.normalize(),
            bonus.normalize()
        ),
    };

    OvertimeBonusResult { bonus, audit_step }
}
