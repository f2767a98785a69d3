use rust_decimal::Decimal;

/// Supplemental rate layered onto the base tax rate.
///
/// Each variant produces one comparison row on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxAddition {
    None,
    Low,
    High,
}

impl TaxAddition {
    /// Every addition, in display order.
    pub const ALL: [TaxAddition; 3] = [Self::None, Self::Low, Self::High];

    /// The fractional increment (0.00, 0.05 or 0.10).
    pub fn value(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Low => Decimal::new(5, 2),
            Self::High => Decimal::new(10, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}
