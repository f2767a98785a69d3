//! Render model for the tip screen.
//!
//! Each comparison row has three named slots instead of positional children,
//! and rendering is a pure function from state to text. Writing that text
//! somewhere is left to a [`DisplaySink`].

use thiserror::Error;

use crate::calculations::TaxScenario;
use crate::calculations::common::{format_money, format_percent};
use crate::models::{BillError, BillState};

/// Errors raised by a render target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The target has nowhere to put the named slot.
    #[error("display target for '{slot}' is missing")]
    TargetMissing { slot: &'static str },

    /// Writing to the target failed.
    #[error("failed to write display: {0}")]
    Write(String),
}

/// Text for one comparison row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    /// Effective rate as a whole percent, e.g. `"15%"`.
    pub rate: String,
    /// Tax amount to two decimals.
    pub tax: String,
    /// Per-person total to two decimals.
    pub total: String,
}

/// Everything the screen shows after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDisplay {
    /// The amount exactly as typed.
    pub amount: String,
    pub group_size: u32,
    /// One row per addition, in [`TaxAddition::ALL`](crate::TaxAddition::ALL) order.
    pub rows: [RowDisplay; 3],
}

/// Formats one scenario into its three slots.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{TaxAddition, TaxScenario, display::render_row};
///
/// let row = render_row(&TaxScenario {
///     addition: TaxAddition::Low,
///     effective_rate: dec!(0.15),
///     tax_amount: dec!(15),
///     total_per_person: dec!(115),
/// });
///
/// assert_eq!(row.rate, "15%");
/// assert_eq!(row.tax, "15.00");
/// assert_eq!(row.total, "115.00");
/// ```
pub fn render_row(scenario: &TaxScenario) -> RowDisplay {
    RowDisplay {
        rate: format_percent(scenario.effective_rate),
        tax: format_money(scenario.tax_amount),
        total: format_money(scenario.total_per_person),
    }
}

/// Renders the whole screen for `bill`.
///
/// # Errors
///
/// Any [`BillError`] raised while computing the scenarios.
pub fn render_screen(bill: &BillState) -> Result<ScreenDisplay, BillError> {
    let rows = TaxScenario::all(bill)?.map(|scenario| render_row(&scenario));

    Ok(ScreenDisplay {
        amount: bill.amount_text().to_string(),
        group_size: bill.group_size(),
        rows,
    })
}

/// A target that can show a rendered screen.
pub trait DisplaySink {
    fn show(
        &mut self,
        screen: &ScreenDisplay,
    ) -> Result<(), DisplayError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::TaxAddition;

    fn row(
        rate: &str,
        tax: &str,
        total: &str,
    ) -> RowDisplay {
        RowDisplay {
            rate: rate.to_string(),
            tax: tax.to_string(),
            total: total.to_string(),
        }
    }

    #[test]
    fn render_row_rounds_money_half_up() {
        let scenario = TaxScenario {
            addition: TaxAddition::None,
            effective_rate: dec!(0.15),
            tax_amount: dec!(2.9985),
            total_per_person: dec!(7.66583333),
        };

        assert_eq!(render_row(&scenario), row("15%", "3.00", "7.67"));
    }

    #[test]
    fn render_screen_for_default_state() {
        let screen = render_screen(&BillState::default()).unwrap();

        assert_eq!(
            screen,
            ScreenDisplay {
                amount: "0".to_string(),
                group_size: 1,
                rows: [
                    row("0%", "0.00", "0.00"),
                    row("5%", "0.00", "0.00"),
                    row("10%", "0.00", "0.00"),
                ],
            }
        );
    }

    #[test]
    fn render_screen_keeps_raw_amount_text() {
        let mut bill = BillState::new(dec!(0.10), 3);
        for d in [3, 0] {
            bill.append_digit(d).unwrap();
        }
        bill.append_decimal_point().unwrap();

        let screen = render_screen(&bill).unwrap();

        assert_eq!(screen.amount, "30.");
        assert_eq!(
            screen.rows,
            [
                row("10%", "3.00", "11.00"),
                row("15%", "4.50", "11.50"),
                row("20%", "6.00", "12.00"),
            ]
        );
    }

    #[test]
    fn render_screen_fails_for_empty_group() {
        let bill = BillState::new(dec!(0.0), 0);

        assert_eq!(render_screen(&bill), Err(BillError::DivisionUndefined));
    }
}
