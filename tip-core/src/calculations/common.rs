//! Common rounding helpers for money and rate display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.9985)), dec!(3.00));
/// assert_eq!(round_half_up(dec!(33.335)), dec!(33.34));
/// assert_eq!(round_half_up(dec!(33.334)), dec!(33.33));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a fractional rate into a whole percentage, rounding half up.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::whole_percent;
///
/// assert_eq!(whole_percent(dec!(0.15)), dec!(15));
/// assert_eq!(whole_percent(dec!(0.125)), dec!(13));
/// ```
pub fn whole_percent(rate: Decimal) -> Decimal {
    rate.saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a money value with exactly two decimals, e.g. `"5.00"`.
pub fn format_money(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a fractional rate as a whole percentage, e.g. `"15%"`.
pub fn format_percent(rate: Decimal) -> String {
    let mut percent = whole_percent(rate);
    percent.rescale(0);
    format!("{percent}%")
}
