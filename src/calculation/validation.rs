//! Profile validation.
//!
//! The calculator accepts any profile. Validation is a separate step that
//! callers run at the boundary before computing or applying a profile.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationProfile;

/// Largest salary or bonus a profile may carry.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Largest weekly working hours: every hour of the week.
pub const MAX_WEEKLY_HOURS: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Largest overtime: every hour of the year.
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(8_760, 0, 0, false, 0);

/// Rejects profiles with negative or out-of-range amounts and hours.
///
/// Zero working hours are accepted; they yield the maximal hours penalty.
/// The upper limits keep every intermediate of the calculation within
/// `Decimal` range. The tax class and vacation days are valid by
/// construction.
///
/// # Examples
///
/// ```
/// use salary_package::calculation::validate_profile;
/// use salary_package::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// assert!(validate_profile(&CompensationProfile::default()).is_ok());
///
/// let negative = CompensationProfile {
///     base_salary: Decimal::from(-1),
///     ..Default::default()
/// };
/// assert!(validate_profile(&negative).is_err());
/// ```
pub fn validate_profile(profile: &CompensationProfile) -> EngineResult<()> {
    let amounts = [
        ("base_salary", profile.base_salary, MAX_AMOUNT),
        (
            "working_hours_per_week",
            profile.working_hours_per_week,
            MAX_WEEKLY_HOURS,
        ),
        ("overtime_hours", profile.overtime_hours, MAX_OVERTIME_HOURS),
        ("performance_bonus", profile.performance_bonus, MAX_AMOUNT),
    ];

    for (field, value, limit) in amounts {
        if value < Decimal::ZERO {
            return Err(EngineError::validation(
                field,
                format!("must not be negative, got {}", value),
            ));
        }
        if value > limit {
            return Err(EngineError::validation(
                field,
                format!("must not exceed {}, got {}", limit, value),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_invalid_field(profile: &CompensationProfile, expected_field: &str) {
        assert_rejected(profile, expected_field, "must not be negative");
    }

    fn assert_rejected(profile: &CompensationProfile, expected_field: &str, expected: &str) {
        match validate_profile(profile) {
            Err(EngineError::Validation { field, message }) => {
                assert_eq!(field, expected_field);
                assert!(message.contains(expected), "unexpected message {}", message);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert!(validate_profile(&CompensationProfile::default()).is_ok());
    }

    #[test]
    fn test_zero_working_hours_are_valid() {
        let profile = CompensationProfile {
            working_hours_per_week: dec("0"),
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_negative_base_salary_is_rejected() {
        let profile = CompensationProfile {
            base_salary: dec("-40000"),
            ..Default::default()
        };
        assert_invalid_field(&profile, "base_salary");
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let profile = CompensationProfile {
            working_hours_per_week: dec("-0.5"),
            ..Default::default()
        };
        assert_invalid_field(&profile, "working_hours_per_week");
    }

    #[test]
    fn test_negative_overtime_is_rejected() {
        let profile = CompensationProfile {
            overtime_hours: dec("-3"),
            ..Default::default()
        };
        assert_invalid_field(&profile, "overtime_hours");
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let profile = CompensationProfile {
            performance_bonus: dec("-100"),
            ..Default::default()
        };
        assert_invalid_field(&profile, "performance_bonus");
    }

    #[test]
    fn test_limits_have_expected_values() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000"));
        assert_eq!(MAX_WEEKLY_HOURS, dec("168"));
        assert_eq!(MAX_OVERTIME_HOURS, dec("8760"));
    }

    #[test]
    fn test_values_at_limits_are_valid() {
        let profile = CompensationProfile {
            base_salary: MAX_AMOUNT,
            working_hours_per_week: MAX_WEEKLY_HOURS,
            overtime_hours: MAX_OVERTIME_HOURS,
            performance_bonus: MAX_AMOUNT,
            has_company_car: true,
            has_job_bike: true,
            vacation_days: u32::MAX,
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());

        // Every intermediate stays in range at the limits.
        let result = crate::calculation::compute_salary(&profile);
        assert!(result.gross_adjusted > MAX_AMOUNT);
    }

    #[test]
    fn test_values_at_limits_with_short_hours_compute() {
        let profile = CompensationProfile {
            base_salary: MAX_AMOUNT,
            working_hours_per_week: Decimal::ZERO,
            performance_bonus: MAX_AMOUNT,
            ..Default::default()
        };
        assert!(validate_profile(&profile).is_ok());

        let result = crate::calculation::compute_salary(&profile);
        assert_eq!(result.hours_penalty, MAX_AMOUNT);
    }

    #[test]
    fn test_huge_base_salary_is_rejected() {
        let profile = CompensationProfile {
            base_salary: Decimal::MAX,
            ..Default::default()
        };
        assert_rejected(&profile, "base_salary", "must not exceed");
    }

    #[test]
    fn test_more_hours_than_a_week_are_rejected() {
        let profile = CompensationProfile {
            working_hours_per_week: dec("168.5"),
            ..Default::default()
        };
        assert_rejected(&profile, "working_hours_per_week", "must not exceed 168");
    }

    #[test]
    fn test_overtime_above_a_year_is_rejected() {
        let profile = CompensationProfile {
            overtime_hours: dec("8761"),
            ..Default::default()
        };
        assert_rejected(&profile, "overtime_hours", "must not exceed 8760");
    }

    #[test]
    fn test_huge_bonus_is_rejected() {
        let profile = CompensationProfile {
            performance_bonus: dec("1000000000000.01"),
            ..Default::default()
        };
        assert_rejected(&profile, "performance_bonus", "must not exceed");
    }
}
