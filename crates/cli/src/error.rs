// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for reading, validating and running prompts.
//!
//! Read and validation failures are recoverable: the engine renders them and
//! routes to the failing prompt's error target. [`EngineError`] is fatal and
//! is the only error that leaves [`Prompts::run`](crate::engine::Prompts::run).

use askgraph_capture::StepError;
use thiserror::Error;

/// The input stream could not produce the requested unit.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unexpected end of input")]
    EndOfInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ReadError {
    /// Whether the stream ended before the unit could be read.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// A prompt rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Error handed to a prompt's error routing and error renderer.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PromptError {
    /// Whether the failure came from the input stream ending.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Read(e) if e.is_end_of_input())
    }

    /// Convert into the form recorded on a scenario step.
    pub fn to_step_error(&self) -> StepError {
        match self {
            Self::Read(e) => StepError::read(e.to_string()),
            Self::Validation(e) => StepError::validation(e.message()),
        }
    }
}

/// Which routing function produced an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Success,
    Error,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("next_on_success"),
            Self::Error => f.write_str("next_on_error"),
        }
    }
}

/// Fatal conditions that abort a run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no first prompt set; call set_first before run")]
    NoFirstPrompt,

    #[error("first prompt '{id}' is not registered")]
    UnknownFirstPrompt { id: String },

    #[error("prompt '{from}' routed via {route} to unregistered prompt '{to}'")]
    UnknownPrompt {
        from: String,
        to: String,
        route: Route,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("step limit of {limit} reached at prompt '{prompt}'")]
    StepLimit { limit: u64, prompt: String },

    #[error("input ended at prompt '{prompt}' before the scenario finished")]
    EndOfInput { prompt: String },
}

impl EngineError {
    /// Whether the error reflects a broken prompt graph rather than input or I/O.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self,
            Self::NoFirstPrompt | Self::UnknownFirstPrompt { .. } | Self::UnknownPrompt { .. }
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
