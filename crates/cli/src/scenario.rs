// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario loading: turns a TOML or JSON prompt graph into engine prompts.

use crate::config::{PromptKind, PromptSpec, ScenarioConfig, StyleSpec, ValidatorSpec};
use crate::engine::Prompts;
use crate::error::{PromptError, ValidationError};
use crate::prompt::{
    ErrorRenderer, LinePrompter, MultilinePrompter, Prompt, PromptRenderer, Prompter,
};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::net::IpAddr;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when working with scenarios
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Compiled scenario ready to run
#[derive(Debug)]
pub struct Scenario {
    config: ScenarioConfig,
    prompts: Vec<ScenarioPrompt>,
}

impl Scenario {
    /// Load a scenario from a TOML or JSON file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        let config: ScenarioConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        Self::from_config(config)
    }

    /// Create a scenario from a config object, checking the prompt graph
    pub fn from_config(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        let mut ids = HashSet::new();
        for spec in &config.prompts {
            if spec.id.is_empty() {
                return Err(ScenarioError::Validation(
                    "Prompt IDs must not be empty".to_string(),
                ));
            }
            if !ids.insert(spec.id.as_str()) {
                return Err(ScenarioError::Validation(format!(
                    "Duplicate prompt id '{}'",
                    spec.id
                )));
            }
        }

        if !ids.contains(config.first.as_str()) {
            return Err(ScenarioError::Validation(format!(
                "First prompt '{}' is not defined",
                config.first
            )));
        }

        for spec in &config.prompts {
            if let Some(target) = spec.targets().find(|t| !ids.contains(t)) {
                return Err(ScenarioError::Validation(format!(
                    "Prompt '{}' routes to undefined prompt '{}'",
                    spec.id, target
                )));
            }
        }

        let prompts = config
            .prompts
            .iter()
            .map(ScenarioPrompt::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { config, prompts })
    }

    /// Get the scenario name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the scenario configuration
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Build an engine with every prompt registered and the first prompt set
    ///
    /// Engine limits come from the file's `[engine]` table; an unset
    /// `stop_on_end_of_input` is off.
    pub fn into_engine<R: BufRead, W: Write>(self, reader: R, writer: W) -> Prompts<R, W> {
        let mut engine = Prompts::with_config(reader, writer, self.config.engine.resolve(false));
        for prompt in self.prompts {
            let prompt = match prompt.kind {
                PromptKind::Line => Prompt::line(prompt),
                PromptKind::Multiline => Prompt::multiline(prompt),
            };
            engine.register(prompt);
        }
        engine.set_first(self.config.first);
        engine
    }
}

/// Compiled validator
#[derive(Debug)]
enum Validator {
    Any,
    NonEmpty,
    Integer { min: Option<i64>, max: Option<i64> },
    Pattern(Regex),
    Ip,
    KeyValue,
}

impl Validator {
    fn compile(spec: &ValidatorSpec) -> Result<Self, ScenarioError> {
        Ok(match spec {
            ValidatorSpec::Any => Self::Any,
            ValidatorSpec::NonEmpty => Self::NonEmpty,
            ValidatorSpec::Integer { min, max } => Self::Integer {
                min: *min,
                max: *max,
            },
            ValidatorSpec::Pattern { regex } => Self::Pattern(Regex::new(regex)?),
            ValidatorSpec::Ip => Self::Ip,
            ValidatorSpec::KeyValue => Self::KeyValue,
        })
    }

    fn check(&self, input: &str) -> Result<Value, String> {
        match self {
            Self::Any => Ok(Value::from(input)),
            Self::NonEmpty => {
                if input.is_empty() {
                    Err("Empty value given".to_string())
                } else {
                    Ok(Value::from(input))
                }
            }
            Self::Integer { min, max } => {
                let n: i64 = input
                    .trim()
                    .parse()
                    .map_err(|_| format!("{} is not a valid number", input))?;
                if min.is_some_and(|m| n < m) || max.is_some_and(|m| n > m) {
                    return Err(format!("{} is out of range", input));
                }
                Ok(Value::from(n))
            }
            Self::Pattern(regex) => {
                if regex.is_match(input) {
                    Ok(Value::from(input))
                } else {
                    Err(format!("{} does not match {}", input, regex.as_str()))
                }
            }
            Self::Ip => input
                .parse::<IpAddr>()
                .map(|_| Value::from(input))
                .map_err(|_| format!("{} is not a valid IP", input)),
            Self::KeyValue => {
                let (key, value) = split_couple(input)
                    .ok_or_else(|| format!("Check {} is a valid couple key:value", input))?;
                let mut object = Map::new();
                object.insert(key.to_string(), Value::from(value));
                Ok(Value::Object(object))
            }
        }
    }

    fn check_block(&self, inputs: &[String]) -> Result<Value, String> {
        match self {
            Self::NonEmpty if inputs.is_empty() => Err("Empty value given".to_string()),
            Self::KeyValue => {
                let mut object = Map::new();
                for input in inputs {
                    let (key, value) = split_couple(input)
                        .ok_or_else(|| format!("Check {} is a valid couple key:value", input))?;
                    object.insert(key.to_string(), Value::from(value));
                }
                Ok(Value::Object(object))
            }
            _ => inputs
                .iter()
                .map(|input| self.check(input))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }
}

/// Split `key:value`; exactly one colon is allowed.
fn split_couple(input: &str) -> Option<(&str, &str)> {
    let (key, value) = input.split_once(':')?;
    if value.contains(':') {
        return None;
    }
    Some((key, value))
}

/// A prompt defined in a scenario file.
#[derive(Debug)]
struct ScenarioPrompt {
    id: String,
    kind: PromptKind,
    prompt: String,
    validator: Validator,
    message: Option<String>,
    next: String,
    on_error: String,
    branches: Vec<(Regex, String)>,
    style: StyleSpec,
}

impl ScenarioPrompt {
    fn compile(spec: &PromptSpec) -> Result<Self, ScenarioError> {
        let branches = spec
            .branches
            .iter()
            .map(|b| Ok((Regex::new(&b.matches)?, b.next.clone())))
            .collect::<Result<Vec<_>, ScenarioError>>()?;

        Ok(Self {
            id: spec.id.clone(),
            kind: spec.kind,
            prompt: spec.prompt.clone(),
            validator: Validator::compile(&spec.validate)?,
            message: spec.message.clone(),
            next: spec.next.clone().unwrap_or_default(),
            on_error: spec.error_target().to_string(),
            branches,
            style: spec.style.clone().unwrap_or_default(),
        })
    }

    fn validated(&self, checked: Result<Value, String>) -> Result<Value, ValidationError> {
        checked.map_err(|message| ValidationError::new(self.message.clone().unwrap_or(message)))
    }

    fn route(&self, input: &str) -> String {
        self.branches
            .iter()
            .find(|(regex, _)| regex.is_match(input))
            .map(|(_, next)| next.clone())
            .unwrap_or_else(|| self.next.clone())
    }
}

impl Prompter for ScenarioPrompt {
    fn id(&self) -> &str {
        &self.id
    }

    fn prompt_string(&self) -> String {
        self.prompt.clone()
    }

    fn next_on_error(&self, _err: &PromptError) -> String {
        self.on_error.clone()
    }

    fn prompt_renderer(&self) -> Option<&dyn PromptRenderer> {
        self.style.prompt_prefix.as_ref().map(|_| self as &dyn PromptRenderer)
    }

    fn error_renderer(&self) -> Option<&dyn ErrorRenderer> {
        self.style.error_prefix.as_ref().map(|_| self as &dyn ErrorRenderer)
    }
}

impl PromptRenderer for ScenarioPrompt {
    fn print_prompt(&self, out: &mut dyn Write, prompt: &str) -> io::Result<()> {
        let prefix = self.style.prompt_prefix.as_deref().unwrap_or_default();
        writeln!(out, "{}{}", prefix, prompt)
    }
}

impl ErrorRenderer for ScenarioPrompt {
    fn print_error(&self, out: &mut dyn Write, err: &PromptError) -> io::Result<()> {
        let prefix = self.style.error_prefix.as_deref().unwrap_or_default();
        writeln!(out, "{}{}", prefix, err)
    }
}

impl LinePrompter for ScenarioPrompt {
    fn parse(&self, input: &str) -> Result<Value, ValidationError> {
        self.validated(self.validator.check(input))
    }

    fn next_on_success(&self, input: &str) -> String {
        self.route(input)
    }
}

impl MultilinePrompter for ScenarioPrompt {
    fn parse(&self, inputs: &[String]) -> Result<Value, ValidationError> {
        self.validated(self.validator.check_block(inputs))
    }

    fn next_on_success(&self, inputs: &[String]) -> String {
        self.route(&inputs.join("\n"))
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
