#![forbid(unsafe_code)]

//! Lexical classification of argument tokens
//!
//! Classification is purely syntactic; whether a marker names a registered
//! option is decided against the registry by [`is_recognized_marker`].

use super::ParsePolicy;
use crate::registry::OptionRegistry;

/// Syntactic shape of one argument token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `--` with the terminator enabled
    Terminator,
    /// `--name` or `--name=value`
    Long {
        name: &'a str,
        attached: Option<&'a str>,
    },
    /// `-x`, `-xVALUE` or `-abc`; `body` is everything after the dash
    Short { body: &'a str },
    /// Anything else, including a lone `-`
    Positional(&'a str),
}

/// Classifies a token without consulting the registry
pub(crate) fn classify<'a>(token: &'a str, policy: &ParsePolicy) -> Token<'a> {
    if token == "--" {
        return if policy.double_dash_terminator {
            Token::Terminator
        } else {
            Token::Positional(token)
        };
    }

    if let Some(rest) = token.strip_prefix("--") {
        if policy.long_attached_values {
            if let Some((name, value)) = rest.split_once('=') {
                return Token::Long {
                    name,
                    attached: Some(value),
                };
            }
        }
        return Token::Long {
            name: rest,
            attached: None,
        };
    }

    match token.strip_prefix('-') {
        Some(body) if !body.is_empty() => Token::Short { body },
        _ => Token::Positional(token),
    }
}

/// Whether `token` would start a new option if read in option position
///
/// Value collection stops at these tokens. A dash-prefixed token that names
/// no registered option is not a marker, so `-5` can be a value.
pub(crate) fn is_recognized_marker(
    token: &str,
    registry: &OptionRegistry,
    policy: &ParsePolicy,
) -> bool {
    match classify(token, policy) {
        Token::Terminator => true,
        Token::Long { name, .. } => registry.lookup(name).is_some(),
        Token::Short { body } => body
            .chars()
            .next()
            .is_some_and(|c| registry.resolve_char(c).is_some()),
        Token::Positional(_) => false,
    }
}
