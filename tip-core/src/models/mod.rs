mod bill_state;
mod tax_addition;

pub use bill_state::{BillError, BillState, MAX_AMOUNT_DIGITS, MAX_DECIMAL_PLACES};
pub use tax_addition::TaxAddition;
