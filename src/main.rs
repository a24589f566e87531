//! Binary entry point: read configuration, start logging, and drive the shell
//! over stdin/stdout until the user exits.
use std::io;

use anyhow::{anyhow, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use library_manager::config::{Args, Config};
use library_manager::{LibraryService, Shell};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let config = Config::from_args(args, no_color_env, io::stdout().is_tty());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))?;

    tracing::info!(locale = ?config.shell.locale, "library shell starting");

    let stdin = io::stdin();
    let mut shell = Shell::new(LibraryService::new(), config.shell, stdin.lock(), io::stdout());
    shell.run()
}
