#![forbid(unsafe_code)]

//! Core types shared by the registry, parser and result layers

use std::fmt;

/// How many values an option consumes per occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arity {
    /// A toggle; the option takes no values
    #[default]
    None,
    /// Up to `n` values per occurrence (exactly `n` under strict arity)
    Exactly(usize),
    /// Every following token up to the next recognized option marker
    Unlimited,
}

impl Arity {
    /// Returns true if this arity consumes at least one value
    pub fn takes_values(self) -> bool {
        !matches!(self, Arity::None)
    }

    /// Maximum number of raw values per occurrence, if bounded
    pub fn max_values(self) -> Option<usize> {
        match self {
            Arity::None => Some(0),
            Arity::Exactly(n) => Some(n),
            Arity::Unlimited => None,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::None => write!(f, "none"),
            Arity::Exactly(1) => write!(f, "exactly 1 value"),
            Arity::Exactly(n) => write!(f, "exactly {} values", n),
            Arity::Unlimited => write!(f, "one or more values"),
        }
    }
}

/// A key usable to address an option: its short char or either name as a string
///
/// Lets result accessors take `'j'` as readily as `"j"` or `"jvm-arg"`.
pub trait OptionKey {
    /// Returns the identifier as a string slice, allocating only for chars
    fn as_identifier(&self) -> std::borrow::Cow<'_, str>;
}

impl OptionKey for &str {
    fn as_identifier(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed(*self)
    }
}

impl OptionKey for String {
    fn as_identifier(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed(self.as_str())
    }
}

impl OptionKey for &String {
    fn as_identifier(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed(self.as_str())
    }
}

impl OptionKey for char {
    fn as_identifier(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_takes_values() {
        assert!(!Arity::None.takes_values());
        assert!(Arity::Exactly(2).takes_values());
        assert!(Arity::Unlimited.takes_values());
    }

    #[test]
    fn test_arity_max_values() {
        assert_eq!(Arity::None.max_values(), Some(0));
        assert_eq!(Arity::Exactly(3).max_values(), Some(3));
        assert_eq!(Arity::Unlimited.max_values(), None);
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::Exactly(1).to_string(), "exactly 1 value");
        assert_eq!(Arity::Exactly(2).to_string(), "exactly 2 values");
        assert_eq!(Arity::Unlimited.to_string(), "one or more values");
    }

    #[test]
    fn test_option_key_char_and_str_agree() {
        assert_eq!('j'.as_identifier(), "j".as_identifier());
        assert_eq!(String::from("jvm").as_identifier(), "jvm");
    }
}
