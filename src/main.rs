//! langtable CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use langtable::cli::{Cli, ReportCommand};
use langtable::config::ReportConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` and defaults to INFO. Logs go to
/// stderr; stdout carries only the report.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("langtable=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("langtable starting with args: {:?}", cli);

    let config = ReportConfig::default().with_format(cli.format());
    let command = ReportCommand::new(config);

    let stdout = io::stdout();
    match command.execute(&mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
