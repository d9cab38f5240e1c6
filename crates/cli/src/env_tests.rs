// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn log_filter_returns_none_when_unset() {
    std::env::remove_var(ASKGRAPH_LOG);
    assert_eq!(log_filter(), None);
}

#[test]
#[serial]
fn log_filter_ignores_blank_value() {
    std::env::set_var(ASKGRAPH_LOG, "  ");
    let result = log_filter();
    std::env::remove_var(ASKGRAPH_LOG);
    assert_eq!(result, None);
}

#[test]
#[serial]
fn log_filter_returns_directive_when_set() {
    std::env::set_var(ASKGRAPH_LOG, "askgraph=debug");
    let result = log_filter();
    std::env::remove_var(ASKGRAPH_LOG);
    assert_eq!(result.as_deref(), Some("askgraph=debug"));
}

#[test]
#[serial]
fn max_steps_parses_number() {
    std::env::set_var(ASKGRAPH_MAX_STEPS, " 25 ");
    let result = max_steps();
    std::env::remove_var(ASKGRAPH_MAX_STEPS);
    assert_eq!(result, Some(25));
}

#[test]
#[serial]
fn max_steps_ignores_garbage() {
    std::env::set_var(ASKGRAPH_MAX_STEPS, "lots");
    let result = max_steps();
    std::env::remove_var(ASKGRAPH_MAX_STEPS);
    assert_eq!(result, None);
}

#[test]
fn name_constants_match_variables() {
    assert_eq!(ASKGRAPH_LOG, "ASKGRAPH_LOG");
    assert_eq!(ASKGRAPH_MAX_STEPS, "ASKGRAPH_MAX_STEPS");
}
