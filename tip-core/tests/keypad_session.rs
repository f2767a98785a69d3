//! End-to-end keypad sessions driven through the public API.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use tip_core::{
    BillError, BillState, InputEvent, MAX_AMOUNT_DIGITS, SessionConfig, SessionError,
    TaxAddition, TipSession,
};

fn keys(text: &str) -> Vec<InputEvent> {
    text.chars()
        .map(|c| match c {
            '.' => InputEvent::DecimalPoint,
            d => InputEvent::Digit(d.to_digit(10).expect("digit") as u8),
        })
        .collect()
}

fn typed(text: &str) -> BillState {
    let mut bill = BillState::default();
    for event in keys(text) {
        match event {
            InputEvent::DecimalPoint => bill.append_decimal_point().expect("decimal point"),
            InputEvent::Digit(d) => bill.append_digit(d).expect("digit"),
            _ => unreachable!(),
        }
    }
    bill
}

/// Keypad text with up to 25 integer digits and, optionally, a point
/// followed by at most two digits.
fn keypad_text() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(0u8..=9, 1..=25),
        proptest::option::of(proptest::collection::vec(0u8..=9, 0..=2)),
    )
        .prop_map(|(whole, fraction)| {
            let mut text: String = whole.iter().map(|d| char::from(b'0' + d)).collect();
            if let Some(fraction) = fraction {
                text.push('.');
                text.extend(fraction.iter().map(|d| char::from(b'0' + d)));
            }
            text
        })
}

/// What the screen shows after typing `text`: the starting `"0"` is
/// replaced by the first digit, so leading zeros collapse.
fn shown(text: &str) -> String {
    let (whole, rest) = text.split_at(text.find('.').unwrap_or(text.len()));
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    format!("{whole}{rest}")
}

proptest! {
    #[test]
    fn digits_with_at_most_two_places_are_always_accepted(text in keypad_text()) {
        let mut session = TipSession::new(SessionConfig::default()).expect("session");

        for event in keys(&text) {
            prop_assert!(session.handle(event).is_ok(), "rejected {:?} in {}", event, text);
        }

        prop_assert_eq!(&session.screen().amount, &shown(&text));
        prop_assert_eq!(
            session.bill().amount().expect("amount").to_string(),
            shown(&text).trim_end_matches('.').to_string()
        );
    }

    #[test]
    fn third_place_after_two_is_rejected(
        whole in "[0-9]{1,25}",
        fraction in "[0-9]{2}",
        digit in 0u8..=9,
    ) {
        let mut bill = typed(&format!("{whole}.{fraction}"));
        let before = bill.amount_text().to_string();

        prop_assert_eq!(bill.append_digit(digit), Err(BillError::MaxDecimal));
        prop_assert_eq!(bill.amount_text(), before.as_str());
    }
}

#[test]
fn digits_past_limit_are_rejected_and_amount_stays_exact() {
    let mut session = TipSession::new(SessionConfig::default()).expect("session");

    let results: Vec<_> = (0..35)
        .map(|_| session.handle(InputEvent::Digit(9)).map(|_| ()))
        .collect();

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(accepted, MAX_AMOUNT_DIGITS);
    for rejected in &results[MAX_AMOUNT_DIGITS..] {
        assert_eq!(rejected, &Err(SessionError::Bill(BillError::MaxDigits)));
    }
    assert_eq!(session.screen().amount, "9".repeat(MAX_AMOUNT_DIGITS));
    assert_eq!(
        session.bill().amount().expect("amount").to_string(),
        session.screen().amount
    );
}

#[test]
fn third_decimal_place_is_always_rejected() {
    for text in ["0.00", "1.23", "1000.99"] {
        let mut bill = typed(text);

        for digit in 0..=9 {
            assert_eq!(bill.append_digit(digit), Err(BillError::MaxDecimal));
        }
        assert_eq!(bill.amount_text(), text);
    }
}

#[test]
fn clear_always_resets_to_zero() {
    for text in ["0", "5.", "12.34", "99999"] {
        let mut bill = typed(text);

        bill.clear();

        assert_eq!(bill.amount_text(), "0");
    }
}

#[test]
fn hundred_dollar_bill_scenarios() {
    let mut bill = typed("100");
    bill.set_tax_rate(dec!(0.0));
    bill.set_group_size(1);

    assert_eq!(bill.tax_amount(TaxAddition::None), Ok(dec!(0)));
    assert_eq!(bill.tax_amount(TaxAddition::Low), Ok(dec!(5.0)));
    assert_eq!(bill.tax_amount(TaxAddition::High), Ok(dec!(10.0)));
    assert_eq!(bill.total_per_person(TaxAddition::Low), Ok(dec!(105.0)));

    bill.set_group_size(2);
    assert_eq!(bill.total_per_person(TaxAddition::None), Ok(dec!(50.0)));
}

#[test]
fn full_session_renders_every_row() {
    let mut session = TipSession::new(SessionConfig {
        initial_tax_rate: dec!(0.15),
        initial_group_size: 4,
        ..SessionConfig::default()
    })
    .expect("session");

    for event in keys("84.20") {
        session.handle(event).expect("keypad input");
    }
    let screen = session.screen();

    assert_eq!(screen.amount, "84.20");
    let rows: Vec<_> = screen
        .rows
        .iter()
        .map(|r| (r.rate.as_str(), r.tax.as_str(), r.total.as_str()))
        .collect();
    // 84.20 × 0.15 = 12.63 → 96.83 / 4 = 24.2075
    // 84.20 × 0.20 = 16.84 → 101.04 / 4 = 25.26
    // 84.20 × 0.25 = 21.05 → 105.25 / 4 = 26.3125
    assert_eq!(
        rows,
        vec![
            ("15%", "12.63", "24.21"),
            ("20%", "16.84", "25.26"),
            ("25%", "21.05", "26.31"),
        ]
    );
}

#[test]
fn rejected_events_do_not_disturb_later_input() {
    let mut session = TipSession::new(SessionConfig::default()).expect("session");

    session.handle(InputEvent::Digit(3)).expect("digit");
    assert_eq!(
        session.handle(InputEvent::Digit(12)),
        Err(SessionError::Bill(BillError::InvalidDigit(12)))
    );
    assert_eq!(
        session.handle(InputEvent::SetGroupSize(0)),
        Err(SessionError::Bill(BillError::DivisionUndefined))
    );
    session.handle(InputEvent::Digit(6)).expect("digit");

    assert_eq!(session.screen().amount, "36");
    assert_eq!(session.screen().rows[0].total, "36.00");
}
