// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wiring between the command line, a scenario file and the engine.
//!
//! The binary passes its locked stdin and stdout; tests pass buffers.

use crate::cli::Cli;
use crate::config::{EngineConfig, EngineSettings};
use crate::env;
use crate::error::EngineError;
use crate::output::write_answers;
use crate::scenario::{Scenario, ScenarioError};
use askgraph_capture::{ScenarioLog, Step};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario: String,
    pub steps: Vec<Step>,
    pub answers: BTreeMap<String, Value>,
}

/// Errors that end a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to load scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Failed to open transcript '{}': {source}", path.display())]
    Transcript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to write answers: {0}")]
    Output(#[from] std::io::Error),
}

/// Load the scenario named on the command line and run it to completion.
pub fn execute<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<RunReport, RunError> {
    let scenario = Scenario::load(&cli.scenario)?;
    let name = scenario.name().to_string();
    tracing::debug!(
        scenario = %name,
        prompts = scenario.config().prompts.len(),
        "loaded scenario"
    );

    let settings = scenario.config().engine.clone();
    let mut engine = scenario.into_engine(input, output);
    *engine.config_mut() = resolve_config(&settings, cli);

    if let Some(ref path) = cli.transcript {
        let log = ScenarioLog::with_file(path).map_err(|source| RunError::Transcript {
            path: path.clone(),
            source,
        })?;
        engine = engine.with_log(log);
    }

    engine.run()?;

    let log = engine.scenario_log();
    let answers = log.answers();
    let (_, mut output) = engine.into_parts();
    if cli.answers {
        write_answers(&mut output, &answers)?;
    }

    Ok(RunReport {
        scenario: name,
        steps: log.steps(),
        answers,
    })
}

/// Combine command-line, environment and scenario file engine settings.
///
/// `--max-steps` wins over `ASKGRAPH_MAX_STEPS`, which wins over the file.
/// `--keep-going` and `--stop-on-eof` win over the file's
/// `stop_on_end_of_input`; when neither the flags nor the file set it, the
/// run stops at end of input.
pub fn resolve_config(file: &EngineSettings, cli: &Cli) -> EngineConfig {
    let mut config = file.resolve(true);
    if let Some(limit) = cli.max_steps.or_else(env::max_steps) {
        config.max_steps = Some(limit);
    }
    if cli.keep_going {
        config.stop_on_end_of_input = false;
    } else if cli.stop_on_eof {
        config.stop_on_end_of_input = true;
    }
    config
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
