// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_scenario_only() {
    let cli = Cli::try_parse_from(["askgraph", "signup.toml"]).unwrap();
    assert_eq!(cli.scenario, PathBuf::from("signup.toml"));
    assert_eq!(cli.transcript, None);
    assert!(!cli.answers);
    assert_eq!(cli.max_steps, None);
    assert!(!cli.keep_going);
    assert!(!cli.verbose);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "askgraph",
        "signup.json",
        "--transcript",
        "/tmp/run.jsonl",
        "--answers",
        "--max-steps",
        "50",
        "--keep-going",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.transcript, Some(PathBuf::from("/tmp/run.jsonl")));
    assert!(cli.answers);
    assert_eq!(cli.max_steps, Some(50));
    assert!(cli.keep_going);
    assert!(cli.verbose);
}

#[test]
fn test_stop_on_eof_flag() {
    let cli = Cli::try_parse_from(["askgraph", "s.toml", "--stop-on-eof"]).unwrap();
    assert!(cli.stop_on_eof);
    assert!(!cli.keep_going);
}

#[test]
fn test_keep_going_conflicts_with_stop_on_eof() {
    assert!(Cli::try_parse_from(["askgraph", "s.toml", "--keep-going", "--stop-on-eof"]).is_err());
}

#[test]
fn test_scenario_is_required() {
    assert!(Cli::try_parse_from(["askgraph"]).is_err());
}

#[test]
fn test_max_steps_must_be_numeric() {
    assert!(Cli::try_parse_from(["askgraph", "s.toml", "--max-steps", "many"]).is_err());
}
