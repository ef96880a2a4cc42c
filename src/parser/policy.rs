#![forbid(unsafe_code)]

//! Parsing policy: the tunable parts of the tokenizing strategy

use serde::Deserialize;

/// Knobs selecting how the parser treats edge-case syntax
///
/// A policy is handed to [`Parser::new`](super::Parser::new); parsers with
/// different policies can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParsePolicy {
    /// `--` ends option processing; later tokens are positional
    pub double_dash_terminator: bool,
    /// `--name=value` supplies an attached value to a long option
    pub long_attached_values: bool,
    /// `-abc` expands to `-a -b -c`
    pub bundle_short_flags: bool,
    /// The first positional argument ends option processing
    pub stop_at_non_option: bool,
    /// `Arity::Exactly(n)` demands all `n` values instead of at most `n`
    pub strict_arity: bool,
}

impl ParsePolicy {
    /// POSIX-style parsing: options end at the first positional argument
    pub fn posix() -> Self {
        ParsePolicy {
            stop_at_non_option: true,
            ..Self::default()
        }
    }

    /// Fixed arities must be fully satisfied on every occurrence
    pub fn strict() -> Self {
        ParsePolicy {
            strict_arity: true,
            ..Self::default()
        }
    }
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy {
            double_dash_terminator: true,
            long_attached_values: true,
            bundle_short_flags: true,
            stop_at_non_option: false,
            strict_arity: false,
        }
    }
}
