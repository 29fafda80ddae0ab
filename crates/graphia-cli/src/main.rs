// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Graphia — handwriting feature extraction from the command line.
//
// Entry point. Loads configuration, initialises logging and dispatches the
// subcommand. Results go to stdout, logs to stderr.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use graphia_core::GraphiaError;
use graphia_core::human_errors::humanize_error;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging comes up after the config so its filter can be the fallback.
    let config = commands::load_config(&cli);
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    tracing::info!("Graphia starting");

    match config.and_then(|config| commands::run(&cli.command, config)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &GraphiaError) {
    tracing::error!(error = %err, "command failed");
    let human = humanize_error(err);
    eprintln!("error: {}", human.message);
    eprintln!("  {}", human.suggestion);
}
