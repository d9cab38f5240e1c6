// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt fixtures shared by unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::engine::Prompts;
use crate::error::{EngineError, PromptError, ValidationError};
use crate::prompt::{
    ErrorRenderer, LinePrompter, MultilinePrompter, Prompt, PromptRenderer, Prompter,
    SeparatorRenderer,
};
use askgraph_capture::Step;
use serde_json::Value;
use std::io::{self, Write};

/// Routing shared by the fixtures: `next` on success, `on_error` on failure.
#[derive(Clone, Debug)]
pub struct Routes {
    pub id: String,
    pub prompt: String,
    pub next: String,
    pub on_error: String,
}

impl Routes {
    fn new(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            next: String::new(),
            on_error: id.to_string(),
        }
    }
}

macro_rules! routed_prompter {
    ($ty:ty) => {
        impl $ty {
            pub fn next(mut self, id: &str) -> Self {
                self.routes.next = id.to_string();
                self
            }

            pub fn on_error(mut self, id: &str) -> Self {
                self.routes.on_error = id.to_string();
                self
            }
        }

        impl Prompter for $ty {
            fn id(&self) -> &str {
                &self.routes.id
            }

            fn prompt_string(&self) -> String {
                self.routes.prompt.clone()
            }

            fn next_on_error(&self, _err: &PromptError) -> String {
                self.routes.on_error.clone()
            }
        }
    };
}

/// Line prompt rejecting the empty string.
pub struct TextPrompt {
    routes: Routes,
}

impl TextPrompt {
    pub fn new(id: &str, prompt: &str) -> Self {
        Self {
            routes: Routes::new(id, prompt),
        }
    }
}

routed_prompter!(TextPrompt);

impl LinePrompter for TextPrompt {
    fn parse(&self, input: &str) -> Result<Value, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new("Empty value given"));
        }
        Ok(Value::from(input))
    }

    fn next_on_success(&self, _input: &str) -> String {
        self.routes.next.clone()
    }
}

/// Line prompt accepting a strictly positive integer.
pub struct AgePrompt {
    routes: Routes,
}

impl AgePrompt {
    pub fn new(id: &str, prompt: &str) -> Self {
        Self {
            routes: Routes::new(id, prompt),
        }
    }
}

routed_prompter!(AgePrompt);

impl LinePrompter for AgePrompt {
    fn parse(&self, input: &str) -> Result<Value, ValidationError> {
        let age: i64 = input
            .parse()
            .map_err(|_| ValidationError::new(format!("{} is not a valid number", input)))?;
        if age <= 0 {
            return Err(ValidationError::new("Give a valid age"));
        }
        Ok(Value::from(age))
    }

    fn next_on_success(&self, _input: &str) -> String {
        self.routes.next.clone()
    }
}

/// Multiline prompt rejecting blocks that contain the line `bad`.
pub struct ListPrompt {
    routes: Routes,
}

impl ListPrompt {
    pub fn new(id: &str, prompt: &str) -> Self {
        Self {
            routes: Routes::new(id, prompt),
        }
    }
}

routed_prompter!(ListPrompt);

impl MultilinePrompter for ListPrompt {
    fn parse(&self, inputs: &[String]) -> Result<Value, ValidationError> {
        if let Some(bad) = inputs.iter().find(|l| l.as_str() == "bad") {
            return Err(ValidationError::new(format!("{} is not allowed", bad)));
        }
        Ok(Value::from(inputs.to_vec()))
    }

    fn next_on_success(&self, _inputs: &[String]) -> String {
        self.routes.next.clone()
    }
}

/// Text prompt that draws its own prompt, error and separator.
pub struct StyledPrompt {
    inner: TextPrompt,
}

impl StyledPrompt {
    pub fn new(id: &str, prompt: &str) -> Self {
        Self {
            inner: TextPrompt::new(id, prompt),
        }
    }

    pub fn next(self, id: &str) -> Self {
        Self {
            inner: self.inner.next(id),
        }
    }
}

impl Prompter for StyledPrompt {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn prompt_string(&self) -> String {
        self.inner.prompt_string()
    }

    fn next_on_error(&self, err: &PromptError) -> String {
        self.inner.next_on_error(err)
    }

    fn prompt_renderer(&self) -> Option<&dyn PromptRenderer> {
        Some(self)
    }

    fn error_renderer(&self) -> Option<&dyn ErrorRenderer> {
        Some(self)
    }

    fn separator_renderer(&self) -> Option<&dyn SeparatorRenderer> {
        Some(self)
    }
}

impl PromptRenderer for StyledPrompt {
    fn print_prompt(&self, out: &mut dyn Write, prompt: &str) -> io::Result<()> {
        writeln!(out, "==> {} :", prompt)
    }
}

impl ErrorRenderer for StyledPrompt {
    fn print_error(&self, out: &mut dyn Write, err: &PromptError) -> io::Result<()> {
        writeln!(out, "==> Something went wrong : {}", err)
    }
}

impl SeparatorRenderer for StyledPrompt {
    fn print_separator(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "----")
    }
}

impl LinePrompter for StyledPrompt {
    fn parse(&self, input: &str) -> Result<Value, ValidationError> {
        self.inner.parse(input)
    }

    fn next_on_success(&self, input: &str) -> String {
        self.inner.next_on_success(input)
    }
}

/// Outcome of running a set of prompts over an in-memory input.
pub struct RunOutput {
    pub result: Result<(), EngineError>,
    pub output: String,
    pub steps: Vec<Step>,
}

/// Register `prompts`, start from `first` and run over `input`.
pub fn run_prompts(input: &str, first: &str, prompts: Vec<Prompt>) -> RunOutput {
    let mut engine = Prompts::new(input.as_bytes(), Vec::new());
    for prompt in prompts {
        engine.register(prompt);
    }
    engine.set_first(first);
    let result = engine.run();
    let steps = engine.scenario();
    let (_, output) = engine.into_parts();
    RunOutput {
        result,
        output: String::from_utf8(output).unwrap(),
        steps,
    }
}
