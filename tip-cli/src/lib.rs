pub mod commands;
pub mod config;
pub mod logging;
pub mod terminal;

pub use commands::{Command, CommandError, parse_command};
pub use config::{CliConfig, ConfigFileError, LoggingConfig};
pub use terminal::TerminalDisplay;
