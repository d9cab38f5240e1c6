// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! askgraph binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use askgraph::cli::Cli;
use askgraph::env;
use askgraph::output::{print_error, print_warning};
use askgraph::runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.keep_going && cli.max_steps.is_none() && env::max_steps().is_none() {
        print_warning("--keep-going without a step limit never stops on a looping prompt");
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match runtime::execute(&cli, stdin.lock(), stdout.lock()) {
        Ok(report) => {
            tracing::debug!(
                scenario = %report.scenario,
                steps = report.steps.len(),
                "scenario completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `ASKGRAPH_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let filter = env::log_filter()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
