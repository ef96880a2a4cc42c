#![forbid(unsafe_code)]

//! Immutable output of a parse: options found and positional arguments

use crate::registry::OptionSpec;
use crate::types::OptionKey;
use std::collections::HashMap;
use std::sync::Arc;

/// One option that appeared at least once, with every value it collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    spec: Arc<OptionSpec>,
    values: Vec<String>,
}

impl ParsedOption {
    pub(crate) fn new(spec: Arc<OptionSpec>) -> Self {
        ParsedOption {
            spec,
            values: Vec::new(),
        }
    }

    pub(crate) fn push_value(&mut self, value: String) {
        self.values.push(value);
    }

    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    /// All values in encounter order; empty for zero-arity options
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The first value, if any
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// The value at `index`, or `None` when out of range
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Values grouped as `(key, value)` pairs
    ///
    /// Meaningful for options with a value separator, whose values alternate
    /// key and value. A trailing unpaired entry is dropped.
    pub fn value_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Result of parsing one argument vector
///
/// Every option is addressable by its short or long identifier; both return
/// the same [`ParsedOption`]. Absent options yield `None` from every accessor,
/// which is distinct from a present zero-arity option's empty value list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    options: Vec<ParsedOption>,
    index: HashMap<String, usize>,
    args: Vec<String>,
}

impl ParseResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `spec`, creating it on first encounter
    pub(crate) fn entry(&mut self, spec: &Arc<OptionSpec>) -> &mut ParsedOption {
        let key = spec.short_name().to_string();
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.options.len();
                for id in spec.identifiers() {
                    self.index.insert(id, position);
                }
                self.options.push(ParsedOption::new(Arc::clone(spec)));
                position
            }
        };
        &mut self.options[position]
    }

    pub(crate) fn push_arg(&mut self, arg: String) {
        self.args.push(arg);
    }

    /// The parsed option for an identifier, if it appeared
    pub fn option<K: OptionKey>(&self, key: K) -> Option<&ParsedOption> {
        self.index
            .get(key.as_identifier().as_ref())
            .map(|&position| &self.options[position])
    }

    pub fn has_option<K: OptionKey>(&self, key: K) -> bool {
        self.option(key).is_some()
    }

    /// First value of an option; `None` if absent or if it has no values
    pub fn option_value<K: OptionKey>(&self, key: K) -> Option<&str> {
        self.option(key).and_then(ParsedOption::value)
    }

    /// First value of an option, or `default` when there is none
    pub fn option_value_or<'a, K: OptionKey>(&'a self, key: K, default: &'a str) -> &'a str {
        self.option_value(key).unwrap_or(default)
    }

    /// All values of an option; `None` if absent, empty if it takes no values
    pub fn option_values<K: OptionKey>(&self, key: K) -> Option<&[String]> {
        self.option(key).map(ParsedOption::values)
    }

    /// The value at `index`; `None` if the option is absent or the index is out of range
    pub fn value_at<K: OptionKey>(&self, key: K, index: usize) -> Option<&str> {
        self.option(key).and_then(|option| option.value_at(index))
    }

    /// Positional arguments in their original order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Parsed options in order of first appearance
    pub fn options(&self) -> impl Iterator<Item = &ParsedOption> {
        self.options.iter()
    }

    /// Number of distinct options that appeared
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// True when neither an option nor a positional argument was parsed
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.args.is_empty()
    }
}
