// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt execution engine.
//!
//! [`Prompts`] owns the registry, the input reader and the output sink, and
//! walks the prompt graph from the first prompt until a prompt accepts its
//! input and names no successor. Every attempt is appended to the scenario
//! log, whether it was accepted or not.

use crate::config::EngineConfig;
use crate::error::{EngineError, PromptError, ReadError, Route};
use crate::prompt::{LinePrompter, MultilinePrompter, Prompt};
use crate::reader::InputReader;
use crate::render;
use askgraph_capture::{ScenarioLog, Step};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// Outcome of one visit to a prompt, before it is logged.
struct Attempt {
    inputs: Vec<String>,
    outcome: Result<Value, PromptError>,
    next: String,
}

impl Attempt {
    fn line(prompt: &dyn LinePrompter, read: Result<String, ReadError>) -> Self {
        match read {
            Ok(input) => {
                let outcome = prompt.parse(&input).map_err(PromptError::from);
                let next = match &outcome {
                    Ok(_) => prompt.next_on_success(&input),
                    Err(e) => prompt.next_on_error(e),
                };
                Self {
                    inputs: vec![input],
                    outcome,
                    next,
                }
            }
            Err(e) => {
                let err = PromptError::from(e);
                let next = prompt.next_on_error(&err);
                Self {
                    inputs: Vec::new(),
                    outcome: Err(err),
                    next,
                }
            }
        }
    }

    fn multiline(
        prompt: &dyn MultilinePrompter,
        read: Result<Vec<String>, ReadError>,
    ) -> Self {
        match read {
            Ok(inputs) => {
                let outcome = prompt.parse(&inputs).map_err(PromptError::from);
                let next = match &outcome {
                    Ok(_) => prompt.next_on_success(&inputs),
                    Err(e) => prompt.next_on_error(e),
                };
                Self {
                    inputs,
                    outcome,
                    next,
                }
            }
            Err(e) => {
                let err = PromptError::from(e);
                let next = prompt.next_on_error(&err);
                Self {
                    inputs: Vec::new(),
                    outcome: Err(err),
                    next,
                }
            }
        }
    }
}

/// Registry of prompts plus the run loop that drives them.
pub struct Prompts<R, W> {
    prompts: HashMap<String, Prompt>,
    first: Option<String>,
    reader: InputReader<R>,
    writer: W,
    log: ScenarioLog,
    config: EngineConfig,
}

impl<R: BufRead, W: Write> Prompts<R, W> {
    /// Create an engine reading from `reader` and rendering to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(reader, writer, EngineConfig::default())
    }

    pub fn with_config(reader: R, writer: W, config: EngineConfig) -> Self {
        Self {
            prompts: HashMap::new(),
            first: None,
            reader: InputReader::new(reader),
            writer,
            log: ScenarioLog::new(),
            config,
        }
    }

    /// Record steps into `log`, e.g. one backed by a transcript file.
    pub fn with_log(mut self, log: ScenarioLog) -> Self {
        self.log = log;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Register a prompt under its own ID.
    ///
    /// A prompt already registered under that ID is replaced and returned.
    pub fn register(&mut self, prompt: Prompt) -> Option<Prompt> {
        let id = prompt.id().to_string();
        let previous = self.prompts.insert(id.clone(), prompt);
        if previous.is_some() {
            tracing::warn!(prompt = %id, "replacing already registered prompt");
        }
        previous
    }

    pub fn add_line_prompter(&mut self, prompt: impl LinePrompter + 'static) -> Option<Prompt> {
        self.register(Prompt::line(prompt))
    }

    pub fn add_multiline_prompter(
        &mut self,
        prompt: impl MultilinePrompter + 'static,
    ) -> Option<Prompt> {
        self.register(Prompt::multiline(prompt))
    }

    /// Set the prompt the next run starts from.
    pub fn set_first(&mut self, id: impl Into<String>) {
        self.first = Some(id.into());
    }

    pub fn first(&self) -> Option<&str> {
        self.first.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.prompts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Run the prompt graph until a prompt accepts its input and names no
    /// successor.
    ///
    /// Read and validation failures are rendered and routed through the
    /// failing prompt's `next_on_error`; they never end the run. Routing to an
    /// unregistered prompt does, as do output failures and the limits set in
    /// [`EngineConfig`].
    pub fn run(&mut self) -> Result<(), EngineError> {
        let Self {
            prompts,
            first,
            reader,
            writer,
            log,
            config,
        } = self;

        log.restart();

        let first = first.as_deref().ok_or(EngineError::NoFirstPrompt)?;
        let mut current = match prompts.get(first) {
            Some(prompt) => prompt,
            None => {
                tracing::error!(prompt = %first, "first prompt is not registered");
                return Err(EngineError::UnknownFirstPrompt {
                    id: first.to_string(),
                });
            }
        };

        let mut steps: u64 = 0;
        loop {
            let prompt_string = current.prompt_string();
            tracing::debug!(prompt = current.id(), "rendering prompt");
            render::render_prompt(current, writer, &prompt_string)?;

            let attempt = match current {
                Prompt::Line(p) => Attempt::line(&**p, reader.read_line()),
                Prompt::Multiline(p) => Attempt::multiline(&**p, reader.read_block()),
            };

            if let Err(ref err) = attempt.outcome {
                tracing::debug!(prompt = current.id(), error = %err, "attempt rejected");
                render::render_error(current, writer, err)?;
            }
            writer.flush()?;

            let end_of_input = matches!(&attempt.outcome, Err(e) if e.is_end_of_input());
            let route = if attempt.outcome.is_ok() {
                Route::Success
            } else {
                Route::Error
            };
            let recorded = attempt
                .outcome
                .as_ref()
                .map(Value::clone)
                .map_err(PromptError::to_step_error);
            log.record(current.id(), prompt_string, attempt.inputs, recorded);
            steps += 1;

            if end_of_input && config.stop_on_end_of_input {
                return Err(EngineError::EndOfInput {
                    prompt: current.id().to_string(),
                });
            }

            if route == Route::Success && attempt.next.is_empty() {
                tracing::debug!(prompt = current.id(), steps, "reached terminal prompt");
                return Ok(());
            }

            if let Some(limit) = config.max_steps {
                if steps >= limit {
                    return Err(EngineError::StepLimit {
                        limit,
                        prompt: current.id().to_string(),
                    });
                }
            }

            let next = match prompts.get(&attempt.next) {
                Some(next) => next,
                None => {
                    tracing::error!(
                        from = current.id(),
                        to = %attempt.next,
                        %route,
                        "prompt routed to an unregistered prompt"
                    );
                    return Err(EngineError::UnknownPrompt {
                        from: current.id().to_string(),
                        to: attempt.next,
                        route,
                    });
                }
            };

            render::render_separator(current, writer)?;
            tracing::debug!(from = current.id(), to = next.id(), %route, "transition");
            current = next;
        }
    }

    /// Steps recorded by the current or most recent run.
    pub fn scenario(&self) -> Vec<Step> {
        self.log.steps()
    }

    /// Shared handle on the scenario log, usable while a run is in progress.
    pub fn scenario_log(&self) -> ScenarioLog {
        self.log.clone()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Hand the input stream and output sink back to the caller.
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.writer)
    }
}

impl<R, W> std::fmt::Debug for Prompts<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&str> = self.prompts.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("Prompts")
            .field("prompts", &ids)
            .field("first", &self.first)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
