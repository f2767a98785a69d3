//! Starting values and slider bounds for a tip session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for out-of-range session configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The tax slider's upper bound must be positive.
    #[error("maximum tax rate must be positive, got {0}")]
    InvalidMaxTaxRate(Decimal),

    /// The starting tax rate must lie on the tax slider.
    #[error("initial tax rate must be between 0 and {max}, got {rate}")]
    InvalidInitialTaxRate { rate: Decimal, max: Decimal },

    /// The group slider's upper bound must be at least one.
    #[error("maximum group size must be at least 1, got {0}")]
    InvalidMaxGroupSize(u32),

    /// The starting group size must lie on the group slider.
    #[error("initial group size must be between 1 and {max}, got {size}")]
    InvalidInitialGroupSize { size: u32, max: u32 },
}

/// Session configuration.
///
/// Every field has a default, so a partial TOML table is enough:
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::SessionConfig;
///
/// let config = SessionConfig::default();
///
/// assert_eq!(config.initial_tax_rate, dec!(0));
/// assert_eq!(config.initial_group_size, 1);
/// assert_eq!(config.max_tax_rate, dec!(1));
/// assert_eq!(config.max_group_size, 20);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Base tax rate when the session starts.
    pub initial_tax_rate: Decimal,

    /// Group size when the session starts.
    pub initial_group_size: u32,

    /// Upper bound of the tax slider.
    pub max_tax_rate: Decimal,

    /// Upper bound of the group slider.
    pub max_group_size: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_tax_rate: Decimal::ZERO,
            initial_group_size: 1,
            max_tax_rate: Decimal::ONE,
            max_group_size: 20,
        }
    }
}

impl SessionConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `max_tax_rate` is not positive
    /// - `initial_tax_rate` is not in [0, `max_tax_rate`]
    /// - `max_group_size` is zero
    /// - `initial_group_size` is not in [1, `max_group_size`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tax_rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidMaxTaxRate(self.max_tax_rate));
        }
        if self.initial_tax_rate < Decimal::ZERO || self.initial_tax_rate > self.max_tax_rate {
            return Err(ConfigError::InvalidInitialTaxRate {
                rate: self.initial_tax_rate,
                max: self.max_tax_rate,
            });
        }
        if self.max_group_size == 0 {
            return Err(ConfigError::InvalidMaxGroupSize(self.max_group_size));
        }
        if self.initial_group_size == 0 || self.initial_group_size > self.max_group_size {
            return Err(ConfigError::InvalidInitialGroupSize {
                size: self.initial_group_size,
                max: self.max_group_size,
            });
        }
        Ok(())
    }
}
