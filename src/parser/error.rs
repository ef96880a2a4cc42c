#![forbid(unsafe_code)]

//! Parse-time errors

use crate::types::Arity;
use thiserror::Error;

/// Errors that can occur while parsing an argument vector
///
/// Parsing stops at the first error; no partial result is produced.
/// There is no ambiguous-option case: registry identifiers are unique.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token has option syntax but names no registered option
    #[error("Unrecognized option: {token}")]
    UnrecognizedOption { token: String },

    /// Too few value tokens followed an argument-bearing option
    #[error("Missing argument for option {option}: expected {arity}")]
    MissingArgument { option: String, arity: Arity },

    /// A zero-arity long option was written as `--name=value`
    #[error("Option {option} does not take a value, but was given '{value}'")]
    UnexpectedValue { option: String, value: String },

    /// A required option never appeared
    #[error("Missing required option: {option}")]
    MissingRequiredOption { option: String },
}
