#![forbid(unsafe_code)]

//! Declarative registry of recognized options

mod option_registry;
mod option_spec;

pub use option_registry::{OptionRegistry, RegistryError};
pub use option_spec::{DEFAULT_VALUE_SEPARATOR, OptionSpec, OptionSpecBuilder};
