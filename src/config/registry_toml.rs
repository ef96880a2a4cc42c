#![forbid(unsafe_code)]

//! TOML registry files
//!
//! A registry file declares the parser policy and every recognized option:
//!
//! ```toml
//! [parser]
//! strict_arity = false
//!
//! [[options]]
//! short = "j"
//! long = "jvm-arg"
//! arity = "unlimited"
//! value_separator = "="
//! description = "JVM system property"
//! ```

use crate::parser::{ParsePolicy, Parser};
use crate::registry::{OptionRegistry, OptionSpec, RegistryError};
use crate::types::Arity;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a registry file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read registry file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid registry file: {0}")]
    Parse(#[from] toml::de::Error),

    /// `arity` is neither a positive count nor `"none"`/`"unlimited"`
    #[error("Invalid arity for option '{option}': {value}")]
    InvalidArity { option: char, value: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Top-level registry file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub parser: ParsePolicy,
    #[serde(default)]
    pub options: Vec<OptionDef>,
}

/// One `[[options]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDef {
    pub short: char,
    pub long: Option<String>,
    /// Omitted means a zero-arity flag
    pub arity: Option<ArityDef>,
    pub value_separator: Option<char>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

/// Arity as written in TOML: a count or a keyword
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArityDef {
    Count(i64),
    Keyword(String),
}

impl ArityDef {
    fn to_arity(&self, option: char) -> Result<Arity, ConfigError> {
        let invalid = |value: String| ConfigError::InvalidArity { option, value };
        match self {
            ArityDef::Count(n) if *n > 0 => usize::try_from(*n)
                .map(Arity::Exactly)
                .map_err(|_| invalid(n.to_string())),
            ArityDef::Count(n) => Err(invalid(n.to_string())),
            ArityDef::Keyword(word) => match word.as_str() {
                "none" => Ok(Arity::None),
                "unlimited" => Ok(Arity::Unlimited),
                _ => Err(invalid(word.clone())),
            },
        }
    }
}

impl OptionDef {
    /// Converts the entry into a validated spec
    pub fn to_spec(&self) -> Result<OptionSpec, ConfigError> {
        let arity = match &self.arity {
            Some(def) => def.to_arity(self.short)?,
            None => Arity::None,
        };

        let mut builder = OptionSpec::builder(self.short)
            .arity(arity)
            .description(self.description.clone())
            .required(self.required);
        if let Some(long) = &self.long {
            builder = builder.long(long.clone());
        }
        if let Some(separator) = self.value_separator {
            builder = builder.value_separator(separator);
        }

        Ok(builder.build()?)
    }
}

impl Config {
    /// Reads and parses a registry file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), options = config.options.len(), "loaded registry file");
        Ok(config)
    }

    /// Parses registry TOML from a string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the registry, validating every option in declaration order
    pub fn build_registry(&self) -> Result<OptionRegistry, ConfigError> {
        let mut registry = OptionRegistry::new();
        for def in &self.options {
            registry.register(def.to_spec()?)?;
        }
        Ok(registry)
    }

    /// A parser configured with this file's policy
    pub fn parser(&self) -> Parser {
        Parser::new(self.parser)
    }
}
