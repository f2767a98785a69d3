//! Text commands standing in for keypad presses and slider moves.
//!
//! | Command          | Effect                                   |
//! |------------------|------------------------------------------|
//! | `12.50`          | one keypad press per character           |
//! | `c`, `clear`     | clear the amount                         |
//! | `tax <value>`    | move the tax slider (`0.15` or `15%`)    |
//! | `group <value>`  | move the group slider (floored)          |
//! | `q`, `quit`      | end the session                          |

use std::ops::ControlFlow;

use thiserror::Error;
use tip_core::{DisplayError, DisplaySink, InputEvent, SessionError, TipSession};
use tracing::warn;

/// Errors raised while parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown input '{0}'")]
    UnknownInput(String),

    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Keypad presses (digits, decimal point, clear) in order.
    Keys(Vec<InputEvent>),
    /// Raw tax slider position.
    TaxSlider(f32),
    /// Raw group slider position.
    GroupSlider(f32),
    Quit,
}

impl Command {
    /// The input events this command produces for `session`.
    ///
    /// Slider positions are converted with the session's bounds.
    pub fn events(
        &self,
        session: &TipSession,
    ) -> Vec<InputEvent> {
        match self {
            Self::Keys(events) => events.clone(),
            Self::TaxSlider(value) => {
                vec![InputEvent::SetTaxRate(session.tax_rate_from_slider(*value))]
            }
            Self::GroupSlider(value) => {
                vec![InputEvent::SetGroupSize(session.group_size_from_slider(*value))]
            }
            Self::Quit => Vec::new(),
        }
    }
}

/// Parses one command line.
///
/// ```
/// use tip_cli::{Command, parse_command};
/// use tip_core::InputEvent;
///
/// assert_eq!(
///     parse_command("4.5"),
///     Ok(Command::Keys(vec![
///         InputEvent::Digit(4),
///         InputEvent::DecimalPoint,
///         InputEvent::Digit(5),
///     ]))
/// );
/// assert_eq!(parse_command("tax 15%"), Ok(Command::TaxSlider(0.15)));
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(CommandError::UnknownInput(line.trim().to_string()));
    }

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("q" | "quit", None) => Ok(Command::Quit),
        ("c" | "clear", None) => Ok(Command::Keys(vec![InputEvent::Clear])),
        ("tax", Some(value)) => parse_rate(value).map(Command::TaxSlider),
        ("tax", None) => Err(CommandError::MissingArgument("tax")),
        ("group", Some(value)) => parse_number(value).map(Command::GroupSlider),
        ("group", None) => Err(CommandError::MissingArgument("group")),
        (_, None) => parse_keys(head),
        _ => Err(CommandError::UnknownInput(line.trim().to_string())),
    }
}

fn parse_keys(keys: &str) -> Result<Command, CommandError> {
    keys.chars()
        .map(|key| match key {
            '.' => Ok(InputEvent::DecimalPoint),
            _ => key
                .to_digit(10)
                .map(|d| InputEvent::Digit(d as u8))
                .ok_or_else(|| CommandError::UnknownInput(keys.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Command::Keys)
}

fn parse_number(value: &str) -> Result<f32, CommandError> {
    value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber {
            input: value.to_string(),
        })
}

/// Accepts a fraction (`0.15`) or a percentage (`15%`).
fn parse_rate(value: &str) -> Result<f32, CommandError> {
    match value.strip_suffix('%') {
        Some(percent) => parse_number(percent)
            .map(|p| p / 100.0)
            .map_err(|_| CommandError::InvalidNumber {
                input: value.to_string(),
            }),
        None => parse_number(value),
    }
}

/// Runs `command` against the session, showing each committed screen.
///
/// Rejected input is logged by the session and skipped; only a failing
/// display stops the run.
///
/// # Errors
///
/// [`DisplayError`] if `display` cannot show a screen.
pub fn execute<D: DisplaySink + ?Sized>(
    session: &mut TipSession,
    display: &mut D,
    command: &Command,
) -> Result<ControlFlow<()>, DisplayError> {
    if *command == Command::Quit {
        return Ok(ControlFlow::Break(()));
    }

    for event in command.events(session) {
        match session.dispatch(event, display) {
            Ok(()) | Err(SessionError::Bill(_)) => {}
            Err(SessionError::Display(error)) => return Err(error),
            Err(error) => warn!(%error, "Unexpected session error"),
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Parses and runs one input line. Unparseable lines are logged and
/// skipped.
///
/// # Errors
///
/// [`DisplayError`] if `display` cannot show a screen.
pub fn run_line<D: DisplaySink + ?Sized>(
    session: &mut TipSession,
    display: &mut D,
    line: &str,
) -> Result<ControlFlow<()>, DisplayError> {
    match parse_command(line) {
        Ok(command) => execute(session, display, &command),
        Err(CommandError::Empty) => Ok(ControlFlow::Continue(())),
        Err(error) => {
            warn!(%error, "Ignoring command");
            Ok(ControlFlow::Continue(()))
        }
    }
}
