//! Shared helpers for monetary math.

use rust_decimal::Decimal;

/// Rounds to two decimal places, half-up (midpoint away from zero),
/// the standard financial convention for currency amounts.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(144.444)), dec!(144.44));
    }

    #[test]
    fn rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(144.445)), dec!(144.45));
    }

    #[test]
    fn rounds_away_from_zero_for_negatives() {
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn preserves_rounded_values() {
        assert_eq!(round_half_up(dec!(390.00)), dec!(390.00));
    }
}
