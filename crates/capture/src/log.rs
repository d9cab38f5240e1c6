// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario log implementation.

use crate::step::{Step, StepError};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

struct Inner {
    start: Instant,
    steps: Vec<Step>,
}

/// Append-only record of the steps taken during a run.
///
/// Clones share the same storage, so a handle taken before a run observes
/// steps as the engine appends them.
pub struct ScenarioLog {
    inner: Arc<Mutex<Inner>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ScenarioLog {
    /// Create a new in-memory scenario log
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                start: Instant::now(),
                steps: Vec::new(),
            })),
            file_writer: None,
        }
    }

    /// Create a scenario log that also appends each step to a JSONL transcript.
    ///
    /// The file is appended to, so several runs can share one transcript.
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            ..Self::new()
        })
    }

    /// Record a step and return a copy of it
    pub fn record(
        &self,
        prompt_id: impl Into<String>,
        prompt_string: impl Into<String>,
        inputs: Vec<String>,
        outcome: Result<Value, StepError>,
    ) -> Step {
        let mut inner = self.inner.lock();
        let (value, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        let step = Step {
            seq: inner.steps.len() as u64,
            timestamp: SystemTime::now(),
            elapsed: inner.start.elapsed(),
            prompt_id: prompt_id.into(),
            prompt_string: prompt_string.into(),
            inputs,
            value,
            error,
        };

        inner.steps.push(step.clone());

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Err(e) = append_line(&mut *w, &step) {
                tracing::warn!(
                    seq = step.seq,
                    prompt = %step.prompt_id,
                    error = %e,
                    "failed to append step to transcript"
                );
            }
        }

        step
    }

    /// Get all recorded steps
    pub fn steps(&self) -> Vec<Step> {
        self.inner.lock().steps.clone()
    }

    /// Get the last N steps
    pub fn last(&self, n: usize) -> Vec<Step> {
        let inner = self.inner.lock();
        inner.steps.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count steps matching a predicate
    pub fn count<F: Fn(&Step) -> bool>(&self, pred: F) -> usize {
        self.inner.lock().steps.iter().filter(|s| pred(s)).count()
    }

    /// Find steps taken at a given prompt
    pub fn find_by_prompt(&self, prompt_id: &str) -> Vec<Step> {
        self.filtered(|s| s.prompt_id == prompt_id)
    }

    /// Find steps whose input was accepted
    pub fn find_accepted(&self) -> Vec<Step> {
        self.filtered(Step::is_accepted)
    }

    /// Find steps that ended in an error
    pub fn find_failures(&self) -> Vec<Step> {
        self.filtered(|s| !s.is_accepted())
    }

    /// Last accepted value for each prompt, keyed by prompt ID
    pub fn answers(&self) -> BTreeMap<String, Value> {
        let inner = self.inner.lock();
        let mut answers = BTreeMap::new();
        for step in &inner.steps {
            if let Some(ref value) = step.value {
                answers.insert(step.prompt_id.clone(), value.clone());
            }
        }
        answers
    }

    /// Get the total number of steps
    pub fn len(&self) -> usize {
        self.inner.lock().steps.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().steps.is_empty()
    }

    /// Drop all steps and restart the elapsed clock for a new run
    pub fn restart(&self) {
        let mut inner = self.inner.lock();
        inner.steps.clear();
        inner.start = Instant::now();
    }

    fn filtered<F: Fn(&Step) -> bool>(&self, pred: F) -> Vec<Step> {
        self.inner
            .lock()
            .steps
            .iter()
            .filter(|s| pred(s))
            .cloned()
            .collect()
    }
}

fn append_line<W: Write>(w: &mut W, step: &Step) -> std::io::Result<()> {
    let json = serde_json::to_string(step)?;
    writeln!(w, "{}", json)?;
    w.flush()
}

impl Default for ScenarioLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ScenarioLog {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl std::fmt::Debug for ScenarioLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenarioLog")
            .field("steps", &self.len())
            .field("transcript", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
