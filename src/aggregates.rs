//! Scalar folds over collections: sums, counts and zero-guarded ratios.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `price × quantity`, saturating at `Decimal::MIN`/`Decimal::MAX`.
pub fn line_amount(price: Decimal, quantity: u32) -> Decimal {
    price.saturating_mul(Decimal::from(quantity))
}

pub fn sum_by<T, F>(items: &[T], value: F) -> Decimal
where
    F: Fn(&T) -> Decimal,
{
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(value(item)))
}

/// Σ price × quantity. Saturates instead of overflowing.
pub fn sum_products<T, P, Q>(items: &[T], price: P, quantity: Q) -> Decimal
where
    P: Fn(&T) -> Decimal,
    Q: Fn(&T) -> u32,
{
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc.saturating_add(line_amount(price(item), quantity(item)))
    })
}

pub fn sum_counts<T, F>(items: &[T], value: F) -> u64
where
    F: Fn(&T) -> u64,
{
    items.iter().map(value).sum()
}

pub fn count_where<T, P>(items: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).count()
}

/// `numerator / denominator`, defined as zero when the denominator is zero.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// `part / whole × 100` rounded to two places; zero when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> Decimal {
    (ratio(Decimal::from(part), Decimal::from(whole)) * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Period-over-period change as supplied by the reporting backend.
/// Carried through summaries untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trend(pub Decimal);

impl Trend {
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_price_times_quantity() {
        let lines = [(dec!(10), 2u32), (dec!(5), 1u32)];
        assert_eq!(sum_products(&lines, |l| l.0, |l| l.1), dec!(25));
        let empty: [(Decimal, u32); 0] = [];
        assert_eq!(sum_products(&empty, |l| l.0, |l| l.1), Decimal::ZERO);
    }

    #[test]
    fn overflowing_sums_saturate() {
        let huge = Decimal::MAX / dec!(2);
        assert_eq!(line_amount(huge, 3), Decimal::MAX);
        assert_eq!(line_amount(-huge, 3), Decimal::MIN);
        let lines = [(huge, 1u32), (huge, 1u32), (huge, 1u32)];
        assert_eq!(sum_products(&lines, |l| l.0, |l| l.1), Decimal::MAX);
    }

    #[test]
    fn ratio_with_zero_denominator_is_zero() {
        assert_eq!(ratio(dec!(100), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(ratio(dec!(1), dec!(4)), dec!(0.25));
    }

    #[test]
    fn percentage_rounds_and_guards() {
        assert_eq!(percentage(0, 0), Decimal::ZERO);
        assert_eq!(percentage(1, 3), dec!(33.33));
        assert_eq!(percentage(3, 3), dec!(100));
    }

    #[test]
    fn counts_matching_records() {
        let values = [1, 5, 7, 2];
        assert_eq!(count_where(&values, |v| *v > 3), 2);
        assert_eq!(sum_counts(&values, |v| *v as u64), 15);
    }

    #[test]
    fn trend_sign() {
        assert!(Trend(dec!(12)).is_positive());
        assert!(!Trend(dec!(-8)).is_positive());
        assert!(!Trend::default().is_positive());
    }
}
