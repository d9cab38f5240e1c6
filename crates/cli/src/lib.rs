// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt-graph execution engine for interactive command-line sessions.
//!
//! A session is a directed graph of named prompts. Each prompt asks for a
//! line or a blank-line-terminated block of lines, validates it, and names
//! the prompt to show next: one target on success, another on failure. The
//! engine drives that graph and records every attempt in a scenario log.
//!
//! ```
//! use askgraph::engine::Prompts;
//! use askgraph::error::{PromptError, ValidationError};
//! use askgraph::prompt::{LinePrompter, Prompter};
//! use serde_json::Value;
//!
//! struct Name;
//!
//! impl Prompter for Name {
//!     fn id(&self) -> &str {
//!         "name"
//!     }
//!     fn prompt_string(&self) -> String {
//!         "Enter your name".to_string()
//!     }
//!     fn next_on_error(&self, _err: &PromptError) -> String {
//!         "name".to_string()
//!     }
//! }
//!
//! impl LinePrompter for Name {
//!     fn parse(&self, input: &str) -> Result<Value, ValidationError> {
//!         if input.is_empty() {
//!             return Err(ValidationError::new("Empty value given"));
//!         }
//!         Ok(Value::from(input))
//!     }
//!     fn next_on_success(&self, _input: &str) -> String {
//!         String::new()
//!     }
//! }
//!
//! let mut prompts = Prompts::new("\nBrad\n".as_bytes(), Vec::new());
//! prompts.add_line_prompter(Name);
//! prompts.set_first("name");
//! prompts.run().unwrap();
//!
//! assert_eq!(prompts.scenario().len(), 2);
//! assert_eq!(prompts.scenario_log().answers()["name"], "Brad");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod reader;
pub mod render;
/// Re-exported scenario log types from the askgraph-capture crate.
pub mod capture {
    pub use askgraph_capture::{ScenarioLog, Step, StepError, StepErrorKind};
}

// Command-line glue - pub for binary access, hidden from docs
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod runtime;
#[doc(hidden)]
pub mod scenario;

#[cfg(test)]
mod test_helpers;

pub use engine::Prompts;
pub use error::{EngineError, PromptError, ReadError, ValidationError};
pub use prompt::{
    ErrorRenderer, LinePrompter, MultilinePrompter, Prompt, PromptRenderer, Prompter,
    SeparatorRenderer,
};
