// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario log recording for prompt runs.
//!
//! Every attempt the engine makes at a prompt is captured as a [`Step`] and
//! appended to a [`ScenarioLog`], which callers inspect during or after a run.

mod duration_serde;
mod log;
mod step;

pub use log::ScenarioLog;
pub use step::{Step, StepError, StepErrorKind};
