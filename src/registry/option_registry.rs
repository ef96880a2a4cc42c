#![forbid(unsafe_code)]

//! Option registry: identifier lookup for option specifications
//!
//! Short and long names share a single identifier namespace, so any string
//! resolves to at most one spec. A spec may reuse its own short name as its
//! long name (`-c` / `--c`).

use super::OptionSpec;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Either identifier of the new spec is already registered
    #[error("Option identifier '{0}' is already registered")]
    DuplicateIdentifier(String),

    /// The spec failed validation in its builder
    #[error("Invalid option '{id}': {reason}")]
    InvalidOption { id: String, reason: String },
}

/// Mapping from option identifiers to their specs
///
/// Built once, then shared read-only. Each spec is stored behind an `Arc`
/// so both of its identifiers resolve to the identical instance, and parse
/// results can hold the spec without borrowing the registry.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    specs: Vec<Arc<OptionSpec>>,
    short: HashMap<char, usize>,
    long: HashMap<String, usize>,
}

impl OptionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a spec to the registry
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if the short or long
    /// name is already taken by another spec. The registry is left unchanged.
    pub fn register(&mut self, spec: OptionSpec) -> Result<(), RegistryError> {
        let short_id = spec.short_name().to_string();
        if self.lookup(&short_id).is_some() {
            return Err(RegistryError::DuplicateIdentifier(short_id));
        }

        if let Some(long) = spec.long_name() {
            // A long name equal to the spec's own short name is an alias, not a clash
            if long != short_id && self.lookup(long).is_some() {
                return Err(RegistryError::DuplicateIdentifier(long.to_string()));
            }
        }

        let index = self.specs.len();
        self.short.insert(spec.short_name(), index);
        if let Some(long) = spec.long_name() {
            self.long.insert(long.to_string(), index);
        }

        debug!(
            short = %spec.short_name(),
            long = spec.long_name().unwrap_or(""),
            arity = %spec.arity(),
            "registered option"
        );
        self.specs.push(Arc::new(spec));
        Ok(())
    }

    /// Builder-style form of [`register`](Self::register)
    pub fn with(mut self, spec: OptionSpec) -> Result<Self, RegistryError> {
        self.register(spec)?;
        Ok(self)
    }

    /// Registers a zero-arity flag
    pub fn add_flag(
        &mut self,
        short: char,
        long: Option<&str>,
        description: &str,
    ) -> Result<(), RegistryError> {
        self.add_option(short, long, false, description)
    }

    /// Registers an option taking one value (`has_arg`) or none
    pub fn add_option(
        &mut self,
        short: char,
        long: Option<&str>,
        has_arg: bool,
        description: &str,
    ) -> Result<(), RegistryError> {
        let mut builder = OptionSpec::builder(short).description(description);
        if let Some(long) = long {
            builder = builder.long(long);
        }
        if has_arg {
            builder = builder.has_arg();
        }
        self.register(builder.build()?)
    }

    /// Resolves a short or long identifier to its spec
    pub fn lookup(&self, identifier: &str) -> Option<&OptionSpec> {
        self.lookup_shared(identifier).map(Arc::as_ref)
    }

    /// Resolves a short name only
    pub fn lookup_short(&self, short: char) -> Option<&OptionSpec> {
        self.short.get(&short).map(|&i| self.specs[i].as_ref())
    }

    /// Resolves a long name only
    pub fn lookup_long(&self, long: &str) -> Option<&OptionSpec> {
        self.long.get(long).map(|&i| self.specs[i].as_ref())
    }

    pub(crate) fn lookup_shared(&self, identifier: &str) -> Option<&Arc<OptionSpec>> {
        let mut chars = identifier.chars();
        let index = match (chars.next(), chars.next()) {
            (Some(c), None) => self.short.get(&c).or_else(|| self.long.get(identifier)),
            _ => self.long.get(identifier),
        };
        index.map(|&i| &self.specs[i])
    }

    /// Resolves the identifier after a single dash: short names first, then
    /// a one-character long name
    pub(crate) fn resolve_char(&self, c: char) -> Option<&Arc<OptionSpec>> {
        let mut buf = [0u8; 4];
        self.lookup_shared(c.encode_utf8(&mut buf))
    }

    /// Iterates over specs in registration order
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter().map(Arc::as_ref)
    }

    /// Specs that must appear in every parse
    pub fn required(&self) -> impl Iterator<Item = &OptionSpec> {
        self.iter().filter(|spec| spec.is_required())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Arity;

    fn spec(short: char, long: Option<&str>) -> OptionSpec {
        let mut builder = OptionSpec::builder(short);
        if let Some(long) = long {
            builder = builder.long(long);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_lookup_by_either_alias() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('v', Some("verbose"))).unwrap();

        let by_short = registry.lookup("v").unwrap();
        let by_long = registry.lookup("verbose").unwrap();
        assert!(std::ptr::eq(by_short, by_long));
        assert_eq!(registry.lookup_short('v'), Some(by_short));
        assert_eq!(registry.lookup_long("verbose"), Some(by_long));
    }

    #[test]
    fn test_lookup_missing() {
        let registry = OptionRegistry::new();
        assert!(registry.lookup("x").is_none());
        assert!(registry.lookup("").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_short_name() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('a', None)).unwrap();

        let err = registry.register(spec('a', Some("all"))).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentifier("a".to_string()));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("all").is_none());
    }

    #[test]
    fn test_duplicate_long_name() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('a', Some("all"))).unwrap();

        let err = registry.register(spec('b', Some("all"))).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentifier("all".to_string()));
        assert!(registry.lookup("b").is_none());
    }

    #[test]
    fn test_long_name_clashing_with_other_short_name() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('y', None)).unwrap();

        let err = registry.register(spec('x', Some("y"))).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentifier("y".to_string()));
    }

    #[test]
    fn test_long_name_equal_to_own_short_name() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('c', Some("c"))).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("c").unwrap().long_name(), Some("c"));
    }

    #[test]
    fn test_resolve_char_falls_back_to_long_name() {
        let mut registry = OptionRegistry::new();
        registry.register(spec('x', Some("y"))).unwrap();
        registry.register(spec('b', None)).unwrap();

        assert_eq!(registry.resolve_char('y').unwrap().short_name(), 'x');
        assert_eq!(registry.resolve_char('b').unwrap().short_name(), 'b');
        assert!(registry.resolve_char('z').is_none());
    }

    #[test]
    fn test_add_option_helpers() {
        let mut registry = OptionRegistry::new();
        registry.add_flag('a', None, "toggle -a").unwrap();
        registry.add_option('b', Some("bee"), true, "set -b").unwrap();

        assert_eq!(registry.lookup("a").unwrap().arity(), Arity::None);
        assert_eq!(registry.lookup("bee").unwrap().arity(), Arity::Exactly(1));
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let registry = OptionRegistry::new()
            .with(spec('z', None))
            .and_then(|r| r.with(spec('a', None)))
            .and_then(|r| r.with(OptionSpec::builder('m').required(true).build().unwrap()))
            .unwrap();

        let order: Vec<char> = registry.iter().map(OptionSpec::short_name).collect();
        assert_eq!(order, vec!['z', 'a', 'm']);

        let required: Vec<char> = registry.required().map(OptionSpec::short_name).collect();
        assert_eq!(required, vec!['m']);
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionRegistry>();
    }
}
