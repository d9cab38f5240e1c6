// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded step data types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, SystemTime};

/// One recorded attempt at a prompt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Sequence number within the run
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the run started
    #[serde(rename = "elapsed_us", with = "duration_serde")]
    pub elapsed: Duration,

    /// ID of the prompt that was shown
    pub prompt_id: String,

    /// Display string rendered for the prompt
    pub prompt_string: String,

    /// Raw input lines collected; empty when the read itself failed
    pub inputs: Vec<String>,

    /// Value produced by a successful parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Error produced by reading or parsing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StepError>,
}

impl Step {
    /// Whether the attempt was accepted by the prompt.
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }

    /// The first input line, if any was read.
    pub fn first_input(&self) -> Option<&str> {
        self.inputs.first().map(String::as_str)
    }
}

/// Error recorded on a failed step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepError {
    pub kind: StepErrorKind,
    pub message: String,
}

impl StepError {
    pub fn read(message: impl Into<String>) -> Self {
        Self {
            kind: StepErrorKind::Read,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: StepErrorKind::Validation,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Where a step error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepErrorKind {
    /// The input stream could not produce the requested unit
    Read,
    /// The prompt rejected the input
    Validation,
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
