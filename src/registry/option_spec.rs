#![forbid(unsafe_code)]

//! Option specifications and their builder

use super::RegistryError;
use crate::types::Arity;

/// Separator used by [`OptionSpecBuilder::default_value_separator`]
pub const DEFAULT_VALUE_SEPARATOR: char = '=';

/// One recognized option: its identifiers and the shape of its values
///
/// Specs are created through [`OptionSpec::builder`], which validates every
/// field at [`OptionSpecBuilder::build`]. Once built a spec is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short_name: char,
    long_name: Option<String>,
    arity: Arity,
    value_separator: Option<char>,
    description: String,
    required: bool,
}

impl OptionSpec {
    /// Starts building a spec with the given short name
    pub fn builder(short_name: char) -> OptionSpecBuilder {
        OptionSpecBuilder::new(short_name)
    }

    pub fn short_name(&self) -> char {
        self.short_name
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// Whether this option consumes at least one value
    pub fn has_argument(&self) -> bool {
        self.arity.takes_values()
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn value_separator(&self) -> Option<char> {
        self.value_separator
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether parsing fails when this option never appears
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Preferred display name: `--long` when a long name exists, else `-s`
    pub fn display_name(&self) -> String {
        match &self.long_name {
            Some(long) => format!("--{}", long),
            None => format!("-{}", self.short_name),
        }
    }

    /// Both identifiers this spec answers to, short first
    pub fn identifiers(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.short_name.to_string()).chain(self.long_name.clone())
    }
}

/// Incremental configuration for an [`OptionSpec`]
///
/// Nothing is checked until [`build`](Self::build), so methods can be
/// chained in any order.
#[derive(Debug, Clone)]
pub struct OptionSpecBuilder {
    short_name: char,
    long_name: Option<String>,
    arity: Arity,
    value_separator: Option<char>,
    description: String,
    required: bool,
}

impl OptionSpecBuilder {
    fn new(short_name: char) -> Self {
        OptionSpecBuilder {
            short_name,
            long_name: None,
            arity: Arity::None,
            value_separator: None,
            description: String::new(),
            required: false,
        }
    }

    pub fn long(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Takes exactly one value per occurrence
    pub fn has_arg(mut self) -> Self {
        self.arity = Arity::Exactly(1);
        self
    }

    /// Takes an unlimited number of values per occurrence
    pub fn has_args(mut self) -> Self {
        self.arity = Arity::Unlimited;
        self
    }

    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    pub fn value_separator(mut self, separator: char) -> Self {
        self.value_separator = Some(separator);
        self
    }

    /// Splits values on [`DEFAULT_VALUE_SEPARATOR`]
    pub fn default_value_separator(self) -> Self {
        self.value_separator(DEFAULT_VALUE_SEPARATOR)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Validates the configuration and produces the spec
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidOption`] if:
    /// - The short name is `-`, `=`, whitespace or a control character
    /// - The long name is empty, starts with `-`, or contains `=` or whitespace
    /// - The arity is `Exactly(0)`
    /// - A value separator is set on a zero-arity option, or is whitespace
    pub fn build(self) -> Result<OptionSpec, RegistryError> {
        let id = self.short_name.to_string();
        let invalid = |reason: &str| RegistryError::InvalidOption {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if matches!(self.short_name, '-' | '=')
            || self.short_name.is_whitespace()
            || self.short_name.is_control()
        {
            return Err(invalid("short name must be a printable character other than '-' or '='"));
        }

        if let Some(long) = &self.long_name {
            if long.is_empty() {
                return Err(invalid("long name must not be empty"));
            }
            if long.starts_with('-') {
                return Err(invalid("long name must not start with '-'"));
            }
            if long.contains('=') || long.chars().any(char::is_whitespace) {
                return Err(invalid("long name must not contain '=' or whitespace"));
            }
        }

        if self.arity == Arity::Exactly(0) {
            return Err(invalid("arity Exactly(0) is not allowed; use Arity::None"));
        }

        if let Some(separator) = self.value_separator {
            if !self.arity.takes_values() {
                return Err(invalid("value separator requires an argument-bearing option"));
            }
            if separator.is_whitespace() {
                return Err(invalid("value separator must not be whitespace"));
            }
        }

        Ok(OptionSpec {
            short_name: self.short_name,
            long_name: self.long_name,
            arity: self.arity,
            value_separator: self.value_separator,
            description: self.description,
            required: self.required,
        })
    }
}
