use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BillError, BillState, TaxAddition};

/// Rate, tax and per-person total for one [`TaxAddition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxScenario {
    pub addition: TaxAddition,

    /// Base rate plus the addition's increment.
    pub effective_rate: Decimal,

    /// Bill amount × effective rate.
    pub tax_amount: Decimal,

    /// (Bill amount + tax) / group size.
    pub total_per_person: Decimal,
}

impl TaxScenario {
    /// Computes the scenario for a single addition.
    ///
    /// # Errors
    ///
    /// Any [`BillError`] raised while parsing the amount or dividing by the
    /// group size.
    pub fn for_addition(
        bill: &BillState,
        addition: TaxAddition,
    ) -> Result<Self, BillError> {
        let (effective_rate, tax_amount, total_per_person) = bill.breakdown(addition)?;
        Ok(Self {
            addition,
            effective_rate,
            tax_amount,
            total_per_person,
        })
    }

    /// Computes all three scenarios in [`TaxAddition::ALL`] order.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::{BillState, TaxAddition, TaxScenario};
    ///
    /// let mut bill = BillState::default();
    /// bill.append_digit(8).unwrap();
    /// bill.append_digit(0).unwrap();
    ///
    /// let [none, low, high] = TaxScenario::all(&bill).unwrap();
    /// assert_eq!(none.total_per_person, dec!(80));
    /// assert_eq!(low.tax_amount, dec!(4));
    /// assert_eq!(high.addition, TaxAddition::High);
    /// ```
    pub fn all(bill: &BillState) -> Result<[Self; 3], BillError> {
        let [none, low, high] = TaxAddition::ALL;
        let scenarios = [
            Self::for_addition(bill, none)?,
            Self::for_addition(bill, low)?,
            Self::for_addition(bill, high)?,
        ];

        if let Some(over) = scenarios.iter().find(|s| s.effective_rate > Decimal::ONE) {
            debug!(
                tax_rate = %bill.tax_rate(),
                addition = over.addition.as_str(),
                effective_rate = %over.effective_rate,
                "Effective tax rate exceeds 100%"
            );
        }
        Ok(scenarios)
    }
}
