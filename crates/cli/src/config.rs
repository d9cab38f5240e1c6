// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Engine settings and scenario configuration types for TOML/JSON files.

use serde::{Deserialize, Serialize};

/// Runtime limits applied by the engine.
///
/// Both settings default to off, in which case every read or validation
/// failure is routed through the failing prompt's error target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Abort once this many steps were recorded without reaching a terminal
    /// prompt
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// End the run with an error when input runs out, instead of routing the
    /// end-of-input error like any other failure
    #[serde(default)]
    pub stop_on_end_of_input: bool,
}

/// `[engine]` table of a scenario file.
///
/// Unset fields leave the decision to the caller, so the binary can apply its
/// own defaults without overriding values the file spells out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSettings {
    #[serde(default)]
    pub max_steps: Option<u64>,

    #[serde(default)]
    pub stop_on_end_of_input: Option<bool>,
}

impl EngineSettings {
    /// Resolve into engine limits, using `stop_default` when the file leaves
    /// `stop_on_end_of_input` unset.
    pub fn resolve(&self, stop_default: bool) -> EngineConfig {
        EngineConfig {
            max_steps: self.max_steps,
            stop_on_end_of_input: self.stop_on_end_of_input.unwrap_or(stop_default),
        }
    }
}

/// Top-level scenario configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// ID of the prompt the run starts from
    pub first: String,

    /// Engine limits
    #[serde(default)]
    pub engine: EngineSettings,

    /// Prompt definitions, in any order
    #[serde(default)]
    pub prompts: Vec<PromptSpec>,
}

/// A single prompt in a scenario file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSpec {
    pub id: String,

    #[serde(default)]
    pub kind: PromptKind,

    /// Display string
    pub prompt: String,

    #[serde(default)]
    pub validate: ValidatorSpec,

    /// Replaces the validator's own error message
    #[serde(default)]
    pub message: Option<String>,

    /// Prompt to run after accepted input; absent or empty ends the run
    #[serde(default)]
    pub next: Option<String>,

    /// Prompt to run after rejected input (default: this prompt)
    #[serde(default)]
    pub on_error: Option<String>,

    /// Input-dependent successors, checked in order before `next`
    #[serde(default)]
    pub branches: Vec<BranchSpec>,

    #[serde(default)]
    pub style: Option<StyleSpec>,
}

impl PromptSpec {
    /// Error target, falling back to the prompt itself.
    pub fn error_target(&self) -> &str {
        self.on_error.as_deref().unwrap_or(&self.id)
    }

    /// Every ID this prompt can route to, excluding the terminal empty ID.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.next
            .as_deref()
            .into_iter()
            .chain(self.branches.iter().map(|b| b.next.as_str()))
            .filter(|id| !id.is_empty())
            .chain(std::iter::once(self.error_target()))
    }
}

/// Shape of input a prompt collects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    #[default]
    Line,
    Multiline,
}

/// Built-in validation applied to each input line
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ValidatorSpec {
    /// Accept anything
    #[default]
    Any,
    /// Reject the empty string
    NonEmpty,
    /// Whole number, optionally bounded (inclusive)
    Integer {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    /// Must match a regular expression
    Pattern { regex: String },
    /// IPv4 or IPv6 address
    Ip,
    /// `key:value` couple; multiline prompts collect them into one object
    KeyValue,
}

/// Conditional successor
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BranchSpec {
    /// Regex tested against the accepted input
    pub matches: String,
    /// Prompt to run when it matches; empty ends the run
    pub next: String,
}

/// Prefixes applied by the prompt's custom renderers
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
    #[serde(default)]
    pub prompt_prefix: Option<String>,
    #[serde(default)]
    pub error_prefix: Option<String>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
