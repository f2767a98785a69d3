//! Bill amount entry and the per-scenario tax arithmetic.
//!
//! [`BillState`] is a value object: the keypad mutators guard the amount
//! string so it only ever holds digits and a single decimal point, and the
//! computation methods derive tax and per-person totals from it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{BillState, TaxAddition};
//!
//! let mut bill = BillState::default();
//! bill.append_digit(4).unwrap();
//! bill.append_digit(0).unwrap();
//! bill.set_tax_rate(dec!(0.10));
//! bill.set_group_size(2);
//!
//! // 40 × (0.10 + 0.05) = 6
//! assert_eq!(bill.tax_amount(TaxAddition::Low).unwrap(), dec!(6.00));
//! // (40 + 6) / 2 = 23
//! assert_eq!(bill.total_per_person(TaxAddition::Low).unwrap(), dec!(23.00));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TaxAddition;

/// Digits allowed after the decimal point of the amount.
pub const MAX_DECIMAL_PLACES: usize = 2;

/// Digits (integer and fraction) the amount may hold.
///
/// Any amount of up to 28 digits is represented exactly by a [`Decimal`], so
/// the amount on screen is always the amount computed with.
pub const MAX_AMOUNT_DIGITS: usize = 28;

const DEFAULT_AMOUNT: &str = "0";

/// Errors raised by bill input and computation.
///
/// Every variant is recoverable: a rejected mutation leaves the state as it
/// was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillError {
    /// The amount already carries the maximum number of decimal places.
    #[error("amount already has the maximum number of decimal places")]
    MaxDecimal,

    /// The amount already contains a decimal point.
    #[error("amount already contains a decimal point")]
    DuplicateDecimal,

    /// The amount already holds [`MAX_AMOUNT_DIGITS`] digits.
    #[error("amount already has the maximum number of digits")]
    MaxDigits,

    /// The amount string is not a number.
    #[error("cannot parse amount '{input}'")]
    Parse { input: String },

    /// The group size is zero, so there is no per-person share.
    #[error("per-person total is undefined for a group size of zero")]
    DivisionUndefined,

    /// The keypad only produces digits 0 through 9.
    #[error("invalid keypad digit {0}")]
    InvalidDigit(u8),

    /// A computed value left the representable range.
    #[error("amount is too large to compute")]
    Overflow,
}

/// Current bill amount, base tax rate and group size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillState {
    amount_text: String,
    tax_rate: Decimal,
    group_size: u32,
}

impl Default for BillState {
    fn default() -> Self {
        Self::new(Decimal::ZERO, 1)
    }
}

impl BillState {
    /// Creates a state with an amount of `"0"` and the given rate and group.
    pub fn new(
        tax_rate: Decimal,
        group_size: u32,
    ) -> Self {
        Self {
            amount_text: DEFAULT_AMOUNT.to_string(),
            tax_rate,
            group_size,
        }
    }

    /// The amount exactly as typed, e.g. `"12."` or `"12.5"`.
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    // ─── input ───────────────────────────────────────────────────────────────

    /// Appends a keypad digit.
    ///
    /// A lone `"0"` is replaced rather than extended, so `0` then `5` reads
    /// `"5"`, while `5` then `0` reads `"50"`.
    ///
    /// # Errors
    ///
    /// * [`BillError::InvalidDigit`] if `digit > 9`.
    /// * [`BillError::MaxDecimal`] if the amount already has
    ///   [`MAX_DECIMAL_PLACES`] digits after its decimal point.
    /// * [`BillError::MaxDigits`] if the amount already has
    ///   [`MAX_AMOUNT_DIGITS`] digits.
    pub fn append_digit(
        &mut self,
        digit: u8,
    ) -> Result<(), BillError> {
        if digit > 9 {
            return Err(BillError::InvalidDigit(digit));
        }
        if self.has_max_decimal_places(MAX_DECIMAL_PLACES) {
            return Err(BillError::MaxDecimal);
        }
        if self.digit_count() >= MAX_AMOUNT_DIGITS {
            return Err(BillError::MaxDigits);
        }

        let ch = char::from(b'0' + digit);
        if self.amount_text == DEFAULT_AMOUNT {
            self.amount_text = ch.to_string();
        } else {
            self.amount_text.push(ch);
        }
        Ok(())
    }

    /// Appends a decimal point. `"5."` is a valid intermediate amount.
    ///
    /// # Errors
    ///
    /// [`BillError::DuplicateDecimal`] if the amount already has one.
    pub fn append_decimal_point(&mut self) -> Result<(), BillError> {
        if self.amount_text.contains('.') {
            return Err(BillError::DuplicateDecimal);
        }
        self.amount_text.push('.');
        Ok(())
    }

    /// Resets the amount to `"0"`. Rate and group size are kept.
    pub fn clear(&mut self) {
        self.amount_text = DEFAULT_AMOUNT.to_string();
    }

    /// Sets the base tax rate. Callers keep it within their slider range.
    pub fn set_tax_rate(
        &mut self,
        rate: Decimal,
    ) {
        self.tax_rate = rate;
    }

    /// Sets the group size. Callers keep it at one or more.
    pub fn set_group_size(
        &mut self,
        size: u32,
    ) {
        self.group_size = size;
    }

    /// Returns true if the amount already has `max_places` digits after
    /// its first decimal point.
    ///
    /// ```
    /// use tip_core::BillState;
    ///
    /// let mut bill = BillState::default();
    /// for d in [1, 2] {
    ///     bill.append_digit(d).unwrap();
    /// }
    /// bill.append_decimal_point().unwrap();
    /// bill.append_digit(3).unwrap();
    /// assert!(!bill.has_max_decimal_places(2));
    ///
    /// bill.append_digit(4).unwrap();
    /// assert!(bill.has_max_decimal_places(2));
    /// ```
    pub fn has_max_decimal_places(
        &self,
        max_places: usize,
    ) -> bool {
        match self.amount_text.find('.') {
            Some(point) => self.amount_text.len() - point > max_places,
            None => false,
        }
    }

    fn digit_count(&self) -> usize {
        self.amount_text.bytes().filter(u8::is_ascii_digit).count()
    }

    // ─── computation ─────────────────────────────────────────────────────────

    /// Parses the amount. A trailing decimal point is ignored.
    ///
    /// # Errors
    ///
    /// [`BillError::Parse`] if the text is not a number. Text built only by
    /// the keypad mutators always parses.
    pub fn amount(&self) -> Result<Decimal, BillError> {
        let digits = self
            .amount_text
            .strip_suffix('.')
            .unwrap_or(&self.amount_text);

        Decimal::from_str(digits).map_err(|_| BillError::Parse {
            input: self.amount_text.clone(),
        })
    }

    /// Base rate plus the addition. Sums above 100% are not clamped.
    pub fn effective_rate(
        &self,
        addition: TaxAddition,
    ) -> Decimal {
        self.tax_rate + addition.value()
    }

    /// Amount × effective rate.
    ///
    /// # Errors
    ///
    /// [`BillError::Parse`] or [`BillError::Overflow`].
    pub fn tax_amount(
        &self,
        addition: TaxAddition,
    ) -> Result<Decimal, BillError> {
        tax_at(self.amount()?, self.effective_rate(addition))
    }

    /// (Amount + tax) / group size.
    ///
    /// # Errors
    ///
    /// * [`BillError::DivisionUndefined`] if the group size is zero.
    /// * [`BillError::Parse`] or [`BillError::Overflow`] from the amount.
    pub fn total_per_person(
        &self,
        addition: TaxAddition,
    ) -> Result<Decimal, BillError> {
        self.breakdown(addition).map(|(_, _, total)| total)
    }

    /// Effective rate, tax and per-person total, parsing the amount and
    /// deriving the rate once.
    pub(crate) fn breakdown(
        &self,
        addition: TaxAddition,
    ) -> Result<(Decimal, Decimal, Decimal), BillError> {
        if self.group_size == 0 {
            return Err(BillError::DivisionUndefined);
        }

        let amount = self.amount()?;
        let rate = self.effective_rate(addition);
        let tax = tax_at(amount, rate)?;
        let total = amount
            .checked_add(tax)
            .and_then(|total| total.checked_div(Decimal::from(self.group_size)))
            .ok_or(BillError::Overflow)?;
        Ok((rate, tax, total))
    }
}

fn tax_at(
    amount: Decimal,
    rate: Decimal,
) -> Result<Decimal, BillError> {
    amount.checked_mul(rate).ok_or(BillError::Overflow)
}
