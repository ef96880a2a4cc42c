#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One option record per parsed option (in order of first appearance)
//! 2. One positional record

use crate::parser::ParseError;
use crate::result::ParseResult;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the parse result as JSONL
    pub fn format(&self, result: &ParseResult) -> String {
        let mut output = String::new();

        for option in result.options() {
            let spec = option.spec();
            let record = OptionRecord {
                record_type: "option",
                short: spec.short_name().to_string(),
                long: spec.long_name(),
                values: option.values(),
            };
            push_record(&mut output, &record);
        }

        let positional = PositionalRecord {
            record_type: "positional",
            args: result.args(),
        };
        push_record(&mut output, &positional);

        output
    }

    /// Format a parse failure as a single error record
    pub fn format_error(&self, error: &ParseError) -> String {
        let kind = match error {
            ParseError::UnrecognizedOption { .. } => "unrecognized_option",
            ParseError::MissingArgument { .. } => "missing_argument",
            ParseError::UnexpectedValue { .. } => "unexpected_value",
            ParseError::MissingRequiredOption { .. } => "missing_required_option",
        };
        let record = ErrorRecord {
            record_type: "error",
            kind,
            message: error.to_string(),
        };

        let mut output = String::new();
        push_record(&mut output, &record);
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Option record for JSONL output
#[derive(Debug, Serialize)]
struct OptionRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    short: String,
    long: Option<&'a str>,
    values: &'a [String],
}

/// Positional-argument record for JSONL output
#[derive(Debug, Serialize)]
struct PositionalRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    args: &'a [String],
}

/// Error record for JSONL output
#[derive(Debug, Serialize)]
struct ErrorRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    kind: &'static str,
    message: String,
}
