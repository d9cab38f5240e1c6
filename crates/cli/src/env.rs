// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by askgraph are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `ASKGRAPH_LOG`: tracing filter directive, e.g. `askgraph=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var(names::ASKGRAPH_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// `ASKGRAPH_MAX_STEPS`: step limit applied when `--max-steps` is absent.
pub fn max_steps() -> Option<u64> {
    std::env::var(names::ASKGRAPH_MAX_STEPS)
        .ok()
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
