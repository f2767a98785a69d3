use std::io::{self, BufRead};
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

use tip_cli::{CliConfig, TerminalDisplay, commands::run_line, logging};
use tip_core::TipSession;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator: type a bill on the keypad and compare three tax scenarios.
///
/// Commands are read from the positional arguments first, then from stdin,
/// one per line: keypad characters such as `12.50`, `clear`, `tax 15%`,
/// `group 3`, or `quit`.
#[derive(Debug, Parser)]
#[command(name = "tipster")]
#[command(version, about)]
struct Cli {
    /// TOML configuration file with `[session]` and `[logging]` tables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting tax rate as a fraction (e.g. 0.08). Overrides the config file.
    #[arg(long)]
    tax_rate: Option<Decimal>,

    /// Starting group size. Overrides the config file.
    #[arg(short, long)]
    group: Option<u32>,

    /// Log filter directive (e.g. `debug`). Overrides the config file and `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not read further commands from stdin.
    #[arg(long, default_value_t = false)]
    no_stdin: bool,

    /// Commands to run before reading stdin.
    commands: Vec<String>,
}

impl Cli {
    /// Loads the config file, if any, and layers the flags on top.
    fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => CliConfig::default(),
        };

        if let Some(rate) = self.tax_rate {
            config.session.initial_tax_rate = rate;
        }
        if let Some(group) = self.group {
            config.session.initial_group_size = group;
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init_logging(&config.logging.level)?;
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(file) = &config.logging.file {
        logging::enable_file_logging(file)?;
    }

    let mut session =
        TipSession::new(config.session.clone()).context("Invalid session configuration")?;
    info!(
        tax_rate = %session.bill().tax_rate(),
        group_size = session.bill().group_size(),
        "Session ready"
    );

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock());
    session.show(&mut display)?;

    let mut quit = false;
    for line in &cli.commands {
        if run_line(&mut session, &mut display, line)?.is_break() {
            quit = true;
            break;
        }
    }

    if !quit && !cli.no_stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            if let ControlFlow::Break(()) = run_line(&mut session, &mut display, &line)? {
                break;
            }
        }
    }

    debug!(amount = session.bill().amount_text(), "Session ended");
    Ok(())
}
