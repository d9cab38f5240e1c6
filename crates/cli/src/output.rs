// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostics on stderr and answer output for the binary.
//!
//! Diagnostics are colored when stderr is a terminal, plain text otherwise.

use serde_json::Value;
use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Error,
    Warning,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Level::Error, msg, is_tty);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Level::Warning, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    level: Level,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{}{}: {}\x1b[0m", level.color(), level.label(), msg);
    } else {
        let _ = writeln!(writer, "{}: {}", level.label(), msg);
    }
}

/// Write collected answers as pretty-printed JSON followed by a newline.
pub fn write_answers<W: Write>(writer: &mut W, answers: &BTreeMap<String, Value>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, answers)?;
    writeln!(writer)?;
    writer.flush()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
