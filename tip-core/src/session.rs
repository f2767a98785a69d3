//! Event handling for a single tip screen.
//!
//! A [`TipSession`] owns the [`BillState`] and the last rendered
//! [`ScreenDisplay`]. Each [`InputEvent`] is applied to a copy of the state
//! and rendered; only when both steps succeed is the copy committed, so a
//! rejected event leaves the session exactly as it was.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, SessionConfig};
use crate::display::{DisplayError, DisplaySink, ScreenDisplay, render_screen};
use crate::models::{BillError, BillState};

/// Decimal places kept when converting a tax slider position.
const SLIDER_RATE_PLACES: u32 = 4;

/// Errors surfaced by a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Bill(#[from] BillError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("invalid session configuration: {0}")]
    Config(#[from] ConfigError),
}

/// A single user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A keypad digit, 0 through 9.
    Digit(u8),
    DecimalPoint,
    Clear,
    SetTaxRate(Decimal),
    SetGroupSize(u32),
}

impl InputEvent {
    fn apply(
        self,
        bill: &mut BillState,
    ) -> Result<(), BillError> {
        match self {
            Self::Digit(digit) => bill.append_digit(digit),
            Self::DecimalPoint => bill.append_decimal_point(),
            Self::Clear => {
                bill.clear();
                Ok(())
            }
            Self::SetTaxRate(rate) => {
                bill.set_tax_rate(rate);
                Ok(())
            }
            Self::SetGroupSize(size) => {
                bill.set_group_size(size);
                Ok(())
            }
        }
    }
}

/// Owned state for one tip screen.
#[derive(Debug, Clone)]
pub struct TipSession {
    config: SessionConfig,
    bill: BillState,
    screen: ScreenDisplay,
}

impl TipSession {
    /// Starts a session from validated configuration and renders the
    /// initial screen.
    ///
    /// # Errors
    ///
    /// [`SessionError::Config`] if the configuration is out of range.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let bill = BillState::new(config.initial_tax_rate, config.initial_group_size);
        let screen = render_screen(&bill)?;
        debug!(
            tax_rate = %bill.tax_rate(),
            group_size = bill.group_size(),
            "Tip session started"
        );

        Ok(Self {
            config,
            bill,
            screen,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bill(&self) -> &BillState {
        &self.bill
    }

    /// The screen as of the last committed event.
    pub fn screen(&self) -> &ScreenDisplay {
        &self.screen
    }

    /// Applies `event` and re-renders.
    ///
    /// # Errors
    ///
    /// [`SessionError::Bill`] if the event is rejected or the new state
    /// cannot be rendered. The state and screen are unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use tip_core::{BillError, InputEvent, SessionConfig, SessionError, TipSession};
    ///
    /// let mut session = TipSession::new(SessionConfig::default()).unwrap();
    /// session.handle(InputEvent::Digit(4)).unwrap();
    /// session.handle(InputEvent::DecimalPoint).unwrap();
    ///
    /// let rejected = session.handle(InputEvent::DecimalPoint);
    /// assert_eq!(rejected, Err(SessionError::Bill(BillError::DuplicateDecimal)));
    /// assert_eq!(session.screen().amount, "4.");
    /// ```
    pub fn handle(
        &mut self,
        event: InputEvent,
    ) -> Result<&ScreenDisplay, SessionError> {
        let mut next = self.bill.clone();

        let screen = event
            .apply(&mut next)
            .and_then(|()| render_screen(&next))
            .map_err(|error| {
                warn!(?event, %error, "Input rejected; keeping previous screen");
                error
            })?;

        debug!(?event, amount = next.amount_text(), "Input applied");
        self.bill = next;
        self.screen = screen;
        Ok(&self.screen)
    }

    /// Applies `event` and shows the new screen on `display`.
    ///
    /// The event is committed before the display is written, so a failing
    /// display does not roll back the input.
    ///
    /// # Errors
    ///
    /// Any error from [`handle`](Self::handle), or
    /// [`SessionError::Display`] if the display rejects the screen.
    pub fn dispatch<D: DisplaySink + ?Sized>(
        &mut self,
        event: InputEvent,
        display: &mut D,
    ) -> Result<(), SessionError> {
        self.handle(event)?;
        self.show(display)
    }

    /// Shows the current screen on `display` without changing state.
    ///
    /// # Errors
    ///
    /// [`SessionError::Display`] if the display rejects the screen.
    pub fn show<D: DisplaySink + ?Sized>(
        &self,
        display: &mut D,
    ) -> Result<(), SessionError> {
        display.show(&self.screen).map_err(|error| {
            warn!(%error, "Display failed");
            SessionError::from(error)
        })
    }

    /// Converts a tax slider position using this session's bounds.
    pub fn tax_rate_from_slider(
        &self,
        value: f32,
    ) -> Decimal {
        tax_rate_from_slider(value, self.config.max_tax_rate)
    }

    /// Converts a group slider position using this session's bounds.
    pub fn group_size_from_slider(
        &self,
        value: f32,
    ) -> u32 {
        group_size_from_slider(value, self.config.max_group_size)
    }
}

/// Converts a continuous tax slider value into a rate in `[0, max]`.
///
/// Non-finite values map to zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::session::tax_rate_from_slider;
///
/// assert_eq!(tax_rate_from_slider(0.15, dec!(1)), dec!(0.15));
/// assert_eq!(tax_rate_from_slider(1.7, dec!(1)), dec!(1));
/// ```
pub fn tax_rate_from_slider(
    value: f32,
    max: Decimal,
) -> Decimal {
    Decimal::from_f32(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp(SLIDER_RATE_PLACES)
        .clamp(Decimal::ZERO, max.max(Decimal::ZERO))
}

/// Floors a continuous group slider value into `[1, max]`.
///
/// Non-finite values map to one.
///
/// ```
/// use tip_core::session::group_size_from_slider;
///
/// assert_eq!(group_size_from_slider(3.9, 20), 3);
/// assert_eq!(group_size_from_slider(0.2, 20), 1);
/// ```
pub fn group_size_from_slider(
    value: f32,
    max: u32,
) -> u32 {
    let max = max.max(1);
    if !value.is_finite() {
        return 1;
    }

    let floored = value.floor();
    if floored < 1.0 {
        1
    } else if floored >= max as f32 {
        max
    } else {
        floored as u32
    }
}
