//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: ")".to_string(),
        },
        42,
    );

    assert_eq!(error.get_position(), 42);
}

#[test]
fn test_end_of_input_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedEndOfInput {
            expected: "expression".to_string(),
        },
        1,
    );

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(
        error.to_string(),
        "unexpected end of input: expected expression at position 1"
    );
}

#[test]
fn test_token_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TokenMismatch {
            expected: TokenKind::CloseBracket,
            received: ")".to_string(),
        },
        4,
    );

    assert_eq!(error.get_error_name(), "TokenMismatch");
    assert_eq!(
        error.get_internal_error().to_string(),
        "token mismatch: expected ], received \")\""
    );
    assert_eq!(error.get_tip().to_string(), "Expected `]`, found `)`");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        3,
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        0,
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, 256);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.to_string(),
        "expression nested deeper than 256 levels at position 256"
    );
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        0,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            token: "]".to_string(),
        },
        0,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
