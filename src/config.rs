//! Declarative registry files

pub mod registry_toml;

pub use registry_toml::{ArityDef, Config, ConfigError, OptionDef};
