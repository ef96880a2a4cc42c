#![forbid(unsafe_code)]

//! argspec: command-line argument parsing against a declarative option registry
//!
//! Declare the recognized options once in an [`OptionRegistry`], then parse
//! any number of argument vectors against it:
//!
//! ```
//! use argspec::{Arity, OptionRegistry, OptionSpec, parse};
//!
//! let mut registry = OptionRegistry::new();
//! registry.add_flag('v', Some("verbose"), "chatty output").unwrap();
//! registry
//!     .register(
//!         OptionSpec::builder('D')
//!             .arity(Arity::Unlimited)
//!             .value_separator('=')
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let result = parse(&registry, &["-Dmode=fast", "-v", "input.txt"]).unwrap();
//! assert!(result.has_option("verbose"));
//! assert_eq!(result.option_values('D').unwrap(), ["mode", "fast"]);
//! assert_eq!(result.args(), ["input.txt"]);
//! ```

pub mod cli;
pub mod config;
pub mod output;
pub mod parser;
pub mod registry;
pub mod result;
pub mod types;

pub use parser::{ParseError, ParsePolicy, Parser, parse};
pub use registry::{DEFAULT_VALUE_SEPARATOR, OptionRegistry, OptionSpec, OptionSpecBuilder, RegistryError};
pub use result::{ParseResult, ParsedOption};
pub use types::{Arity, OptionKey};
