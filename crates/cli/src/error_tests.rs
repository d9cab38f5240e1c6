// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use askgraph_capture::StepErrorKind;

#[test]
fn validation_error_displays_its_message() {
    let err = PromptError::from(ValidationError::new("Give a valid age"));
    assert_eq!(err.to_string(), "Give a valid age");
}

#[test]
fn read_error_displays_cause() {
    let err = PromptError::from(ReadError::EndOfInput);
    assert_eq!(err.to_string(), "unexpected end of input");

    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err = PromptError::from(ReadError::from(io));
    assert_eq!(err.to_string(), "failed to read input: pipe closed");
}

#[test]
fn end_of_input_is_detected_through_prompt_error() {
    assert!(PromptError::from(ReadError::EndOfInput).is_end_of_input());

    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
    assert!(!PromptError::from(ReadError::from(io)).is_end_of_input());
    assert!(!PromptError::from(ValidationError::from("nope")).is_end_of_input());
}

#[test]
fn step_error_keeps_kind_and_message() {
    let read = PromptError::from(ReadError::EndOfInput).to_step_error();
    assert_eq!(read.kind, StepErrorKind::Read);
    assert_eq!(read.message, "unexpected end of input");

    let validation = PromptError::from(ValidationError::from("Empty value given".to_string()));
    let step = validation.to_step_error();
    assert_eq!(step.kind, StepErrorKind::Validation);
    assert_eq!(step.message, "Empty value given");
}

#[test]
fn encoding_error_comes_from_invalid_utf8() {
    let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
    let err = ReadError::from(bad);
    assert!(matches!(err, ReadError::Encoding(_)));
    assert!(err.to_string().starts_with("input is not valid UTF-8"));
}

#[test]
fn engine_error_classifies_configuration_defects() {
    let defect = EngineError::UnknownPrompt {
        from: "name".to_string(),
        to: "agee".to_string(),
        route: Route::Success,
    };
    assert!(defect.is_configuration_defect());
    assert_eq!(
        defect.to_string(),
        "prompt 'name' routed via next_on_success to unregistered prompt 'agee'"
    );

    assert!(EngineError::NoFirstPrompt.is_configuration_defect());
    assert!(!EngineError::EndOfInput {
        prompt: "name".to_string()
    }
    .is_configuration_defect());
    assert!(!EngineError::StepLimit {
        limit: 3,
        prompt: "name".to_string()
    }
    .is_configuration_defect());
}
