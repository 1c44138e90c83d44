//! Currency rounding.

use rust_decimal::Decimal;

/// Rounds to whole currency units, halves toward positive infinity.
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`.
///
/// # Examples
///
/// ```
/// use salary_package::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("9309.44").unwrap()), Decimal::from(9309));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    (amount + Decimal::new(5, 1)).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(round_currency(dec("9309.44")), dec("9309"));
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(round_currency(dec("2.5")), dec("3"));
        assert_eq!(round_currency(dec("0.5")), dec("1"));
    }

    #[test]
    fn test_negative_half_rounds_toward_positive_infinity() {
        assert_eq!(round_currency(dec("-2.5")), dec("-2"));
        assert_eq!(round_currency(dec("-2.51")), dec("-3"));
    }

    #[test]
    fn test_whole_amounts_unchanged() {
        assert_eq!(round_currency(dec("30691")), dec("30691"));
        assert_eq!(round_currency(dec("0")), dec("0"));
    }
}
