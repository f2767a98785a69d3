pub mod calculations;
pub mod config;
pub mod display;
pub mod models;
pub mod session;

#[cfg(test)]
mod test_support;

pub use calculations::TaxScenario;
pub use config::{ConfigError, SessionConfig};
pub use display::{DisplayError, DisplaySink, RowDisplay, ScreenDisplay};
pub use models::*;
pub use session::{InputEvent, SessionError, TipSession};
