// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of prompts, errors and separators.
//!
//! Each event is rendered either by the active prompt's override or by
//! [`DefaultRenderer`], never both.

use crate::error::PromptError;
use crate::prompt::{ErrorRenderer, Prompt, PromptRenderer, SeparatorRenderer};
use std::io::{self, Write};

/// Built-in rendering used when a prompt supplies no override.
///
/// Prompts are printed followed by a newline, errors as their message
/// followed by a newline, and separators as a single blank line.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRenderer;

impl PromptRenderer for DefaultRenderer {
    fn print_prompt(&self, out: &mut dyn Write, prompt: &str) -> io::Result<()> {
        writeln!(out, "{}", prompt)
    }
}

impl ErrorRenderer for DefaultRenderer {
    fn print_error(&self, out: &mut dyn Write, err: &PromptError) -> io::Result<()> {
        writeln!(out, "{}", err)
    }
}

impl SeparatorRenderer for DefaultRenderer {
    fn print_separator(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)
    }
}

/// Render the prompt string for `prompt`.
pub fn render_prompt(prompt: &Prompt, out: &mut dyn Write, text: &str) -> io::Result<()> {
    let renderer = prompt.prompt_renderer().unwrap_or(&DefaultRenderer);
    renderer.print_prompt(out, text)
}

/// Render an error raised while reading or parsing for `prompt`.
pub fn render_error(prompt: &Prompt, out: &mut dyn Write, err: &PromptError) -> io::Result<()> {
    let renderer = prompt.error_renderer().unwrap_or(&DefaultRenderer);
    renderer.print_error(out, err)
}

/// Render the separator that follows `prompt`.
pub fn render_separator(prompt: &Prompt, out: &mut dyn Write) -> io::Result<()> {
    let renderer = prompt.separator_renderer().unwrap_or(&DefaultRenderer);
    renderer.print_separator(out)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
