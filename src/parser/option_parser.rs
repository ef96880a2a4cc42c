#![forbid(unsafe_code)]

//! Single-pass argument parser
//!
//! Walks the argument vector left to right with no backtracking:
//! 1. Classify the token (terminator, long marker, short marker, positional)
//! 2. Resolve markers against the registry, failing on unknown names
//! 3. Collect values per arity, starting with any attached value
//! 4. Split values on the option's separator and merge into the result
//! 5. After the pass, check that required options appeared

use super::tokenizer::{self, Token};
use super::{ParseError, ParsePolicy};
use crate::registry::{OptionRegistry, OptionSpec};
use crate::result::ParseResult;
use std::sync::Arc;
use tracing::{debug, trace};

/// Parses argument vectors with a fixed [`ParsePolicy`]
///
/// A parser holds no per-parse state and can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    policy: ParsePolicy,
}

/// Parses `args` against `registry` with the default policy
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse<S: AsRef<str>>(
    registry: &OptionRegistry,
    args: &[S],
) -> Result<ParseResult, ParseError> {
    Parser::default().parse(registry, args)
}

impl Parser {
    /// Creates a parser using the given policy
    pub fn new(policy: ParsePolicy) -> Self {
        Parser { policy }
    }

    pub fn policy(&self) -> &ParsePolicy {
        &self.policy
    }

    /// Parses an argument vector
    ///
    /// `args` should not include the program name.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A marker names no registered option ([`ParseError::UnrecognizedOption`])
    /// - An option's arity cannot be satisfied ([`ParseError::MissingArgument`])
    /// - A zero-arity long option is given `=value` ([`ParseError::UnexpectedValue`])
    /// - A required option is absent ([`ParseError::MissingRequiredOption`])
    pub fn parse<S: AsRef<str>>(
        &self,
        registry: &OptionRegistry,
        args: &[S],
    ) -> Result<ParseResult, ParseError> {
        let mut result = ParseResult::new();
        let mut cursor = 0;
        let mut options_done = false;

        while cursor < args.len() {
            let token = args[cursor].as_ref();
            cursor += 1;

            if options_done {
                result.push_arg(token.to_string());
                continue;
            }

            let classified = tokenizer::classify(token, &self.policy);
            trace!(token, kind = ?classified, "classified token");

            match classified {
                Token::Terminator => options_done = true,
                Token::Positional(arg) => {
                    result.push_arg(arg.to_string());
                    options_done = self.policy.stop_at_non_option;
                }
                Token::Long { name, attached } => {
                    let spec = registry
                        .lookup_shared(name)
                        .ok_or_else(|| unrecognized(token))?;

                    if !spec.has_argument() {
                        if let Some(value) = attached {
                            return Err(ParseError::UnexpectedValue {
                                option: spec.display_name(),
                                value: value.to_string(),
                            });
                        }
                        result.entry(spec);
                        continue;
                    }

                    cursor = self.collect_values(registry, spec, attached, args, cursor, &mut result)?;
                }
                Token::Short { body } => {
                    cursor = self.parse_short(registry, token, body, args, cursor, &mut result)?;
                }
            }
        }

        if let Some(missing) = registry.required().find(|spec| !result.has_option(spec.short_name())) {
            return Err(ParseError::MissingRequiredOption {
                option: missing.display_name(),
            });
        }

        debug!(
            options = result.option_count(),
            positional = result.args().len(),
            "parsed argument vector"
        );
        Ok(result)
    }

    /// Handles `-x`, `-xVALUE` and bundled `-abc`
    ///
    /// Returns the cursor after any values consumed from later tokens.
    fn parse_short<S: AsRef<str>>(
        &self,
        registry: &OptionRegistry,
        token: &str,
        body: &str,
        args: &[S],
        cursor: usize,
        result: &mut ParseResult,
    ) -> Result<usize, ParseError> {
        let mut rest = body;

        while let Some(c) = rest.chars().next() {
            let spec = registry.resolve_char(c).ok_or_else(|| unrecognized(token))?;
            rest = &rest[c.len_utf8()..];

            if spec.has_argument() {
                let attached = (!rest.is_empty()).then_some(rest);
                return self.collect_values(registry, spec, attached, args, cursor, result);
            }

            result.entry(spec);

            if !rest.is_empty() && !self.policy.bundle_short_flags {
                return Err(unrecognized(token));
            }
        }

        Ok(cursor)
    }

    /// Gathers values for an argument-bearing option and records them
    ///
    /// Takes the attached value first, then following tokens until the arity
    /// is met, the input ends, or a recognized option marker is reached.
    fn collect_values<S: AsRef<str>>(
        &self,
        registry: &OptionRegistry,
        spec: &Arc<OptionSpec>,
        attached: Option<&str>,
        args: &[S],
        mut cursor: usize,
        result: &mut ParseResult,
    ) -> Result<usize, ParseError> {
        let max = spec.arity().max_values();
        let mut raw: Vec<&str> = attached.into_iter().collect();

        while cursor < args.len() && max.is_none_or(|max| raw.len() < max) {
            let next = args[cursor].as_ref();
            if tokenizer::is_recognized_marker(next, registry, &self.policy) {
                break;
            }
            raw.push(next);
            cursor += 1;
        }

        let short_of_strict = self.policy.strict_arity && max.is_some_and(|max| raw.len() < max);
        if raw.is_empty() || short_of_strict {
            return Err(ParseError::MissingArgument {
                option: spec.display_name(),
                arity: spec.arity(),
            });
        }

        let entry = result.entry(spec);
        for value in raw {
            match spec.value_separator().and_then(|sep| value.split_once(sep)) {
                Some((key, value)) => {
                    entry.push_value(key.to_string());
                    entry.push_value(value.to_string());
                }
                None => entry.push_value(value.to_string()),
            }
        }

        Ok(cursor)
    }
}

fn unrecognized(token: &str) -> ParseError {
    ParseError::UnrecognizedOption {
        token: token.to_string(),
    }
}
