#![forbid(unsafe_code)]

//! Command implementations for the `argspec` binary

use super::args::{Cli, ColorChoice, Command, OutputFormat};
use crate::config::{Config, ConfigError};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::registry::OptionRegistry;
use std::path::Path;
use tracing::{debug, error};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARSE_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Runs the selected command and returns the process exit code
pub fn run(cli: Cli) -> i32 {
    match cli.command {
        Command::Check { registry } => run_check(&registry),
        Command::Parse {
            registry,
            format,
            color,
            args,
        } => run_parse(&registry, format, color, &args),
    }
}

fn load(path: &Path) -> Result<(Config, OptionRegistry), ConfigError> {
    let config = Config::load(path)?;
    let registry = config.build_registry()?;
    Ok((config, registry))
}

fn run_check(path: &Path) -> i32 {
    match load(path) {
        Ok((_, registry)) => {
            let required = registry.required().count();
            println!(
                "{}: {} option{} ({} required)",
                path.display(),
                registry.len(),
                if registry.len() == 1 { "" } else { "s" },
                required
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(path = %path.display(), "registry check failed");
            eprintln!("Error: {}", e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_parse(path: &Path, format: OutputFormat, color: ColorChoice, args: &[String]) -> i32 {
    let (config, registry) = match load(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_CONFIG_ERROR;
        }
    };

    debug!(tokens = args.len(), policy = ?config.parser, "parsing argument vector");
    let parsed = config.parser().parse(&registry, args);

    match (format, parsed) {
        (OutputFormat::Human, Ok(result)) => {
            let formatter = HumanFormatter::new(color.into());
            if let Err(e) = formatter.write_to_stdout(&result) {
                eprintln!("Error writing output: {}", e);
                return EXIT_PARSE_ERROR;
            }
            EXIT_SUCCESS
        }
        (OutputFormat::Human, Err(parse_error)) => {
            let formatter = HumanFormatter::new(color.into());
            if formatter.write_error(&parse_error).is_err() {
                eprintln!("error: {}", parse_error);
            }
            EXIT_PARSE_ERROR
        }
        (OutputFormat::Jsonl, Ok(result)) => {
            print!("{}", JsonlFormatter::new().format(&result));
            EXIT_SUCCESS
        }
        (OutputFormat::Jsonl, Err(parse_error)) => {
            print!("{}", JsonlFormatter::new().format_error(&parse_error));
            EXIT_PARSE_ERROR
        }
    }
}
