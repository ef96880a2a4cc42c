#![forbid(unsafe_code)]

//! Tokenizer and parser: interprets an argument vector against a registry

mod error;
mod option_parser;
mod policy;
mod tokenizer;

pub use error::ParseError;
pub use option_parser::{Parser, parse};
pub use policy::ParsePolicy;
