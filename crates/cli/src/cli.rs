// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Run a prompt-graph scenario against stdin and stdout
#[derive(Parser, Clone, Debug)]
#[command(name = "askgraph", version, about = "Run a prompt-graph scenario on the terminal")]
pub struct Cli {
    /// Scenario file (TOML, or JSON when the extension is .json)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Append every step to this JSONL transcript
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Print the collected answers as JSON once the scenario completes
    #[arg(long)]
    pub answers: bool,

    /// Abort after this many steps without reaching a terminal prompt
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Keep routing end-of-input errors instead of stopping the run
    #[arg(long, conflicts_with = "stop_on_eof")]
    pub keep_going: bool,

    /// Stop the run when input ends, even if the scenario file says otherwise
    #[arg(long)]
    pub stop_on_eof: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
