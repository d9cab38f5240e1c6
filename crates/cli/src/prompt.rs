// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt capability set.
//!
//! A prompt is one node of the interaction graph. Every prompt implements
//! [`Prompter`] plus exactly one of [`LinePrompter`] or [`MultilinePrompter`],
//! and is handed to the engine wrapped in the matching [`Prompt`] variant.
//!
//! Prompts reference each other only by ID. Returning an empty ID from a
//! success function marks the prompt as terminal.

use crate::error::{PromptError, ValidationError};
use serde_json::Value;
use std::io::{self, Write};

/// Capabilities shared by both prompt shapes.
pub trait Prompter {
    /// Unique ID of this prompt within the registry.
    fn id(&self) -> &str;

    /// Text shown to the operator; may be computed on every visit.
    fn prompt_string(&self) -> String;

    /// ID of the prompt to run after a failed read or parse.
    fn next_on_error(&self, err: &PromptError) -> String;

    /// Custom prompt rendering, replacing the default when present.
    fn prompt_renderer(&self) -> Option<&dyn PromptRenderer> {
        None
    }

    /// Custom error rendering, replacing the default when present.
    fn error_renderer(&self) -> Option<&dyn ErrorRenderer> {
        None
    }

    /// Custom separator rendering, replacing the default when present.
    fn separator_renderer(&self) -> Option<&dyn SeparatorRenderer> {
        None
    }
}

/// A prompt that asks for a single line.
pub trait LinePrompter: Prompter {
    /// Validate the line and return the value it represents.
    fn parse(&self, input: &str) -> Result<Value, ValidationError>;

    /// ID of the next prompt after `input` was accepted; empty ends the run.
    fn next_on_success(&self, input: &str) -> String;
}

/// A prompt that asks for a block of lines ended by a blank line.
pub trait MultilinePrompter: Prompter {
    /// Validate the block and return the value it represents.
    fn parse(&self, inputs: &[String]) -> Result<Value, ValidationError>;

    /// ID of the next prompt after `inputs` were accepted; empty ends the run.
    fn next_on_success(&self, inputs: &[String]) -> String;
}

/// Renders the prompt string in place of the default.
pub trait PromptRenderer {
    fn print_prompt(&self, out: &mut dyn Write, prompt: &str) -> io::Result<()>;
}

/// Renders a read or validation error in place of the default.
pub trait ErrorRenderer {
    fn print_error(&self, out: &mut dyn Write, err: &PromptError) -> io::Result<()>;
}

/// Renders the separator between two prompts in place of the default.
pub trait SeparatorRenderer {
    fn print_separator(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A registered prompt, tagged by the shape of input it collects.
pub enum Prompt {
    Line(Box<dyn LinePrompter>),
    Multiline(Box<dyn MultilinePrompter>),
}

impl Prompt {
    pub fn line(prompt: impl LinePrompter + 'static) -> Self {
        Self::Line(Box::new(prompt))
    }

    pub fn multiline(prompt: impl MultilinePrompter + 'static) -> Self {
        Self::Multiline(Box::new(prompt))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Line(p) => p.id(),
            Self::Multiline(p) => p.id(),
        }
    }

    pub fn prompt_string(&self) -> String {
        match self {
            Self::Line(p) => p.prompt_string(),
            Self::Multiline(p) => p.prompt_string(),
        }
    }

    pub fn next_on_error(&self, err: &PromptError) -> String {
        match self {
            Self::Line(p) => p.next_on_error(err),
            Self::Multiline(p) => p.next_on_error(err),
        }
    }

    pub fn prompt_renderer(&self) -> Option<&dyn PromptRenderer> {
        match self {
            Self::Line(p) => p.prompt_renderer(),
            Self::Multiline(p) => p.prompt_renderer(),
        }
    }

    pub fn error_renderer(&self) -> Option<&dyn ErrorRenderer> {
        match self {
            Self::Line(p) => p.error_renderer(),
            Self::Multiline(p) => p.error_renderer(),
        }
    }

    pub fn separator_renderer(&self) -> Option<&dyn SeparatorRenderer> {
        match self {
            Self::Line(p) => p.separator_renderer(),
            Self::Multiline(p) => p.separator_renderer(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Multiline(_))
    }
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Line(_) => "Line",
            Self::Multiline(_) => "Multiline",
        };
        f.debug_struct("Prompt")
            .field("kind", &kind)
            .field("id", &self.id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
