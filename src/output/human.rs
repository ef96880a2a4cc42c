#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::parser::ParseError;
use crate::result::{ParseResult, ParsedOption};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Lists each parsed option with its values, then the positional arguments.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the parse result as plain text
    pub fn format(&self, result: &ParseResult) -> String {
        let mut buffer = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write_result(&mut buffer, result);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the parse result to stdout with colors
    pub fn write_to_stdout(&self, result: &ParseResult) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_result(&mut stdout, result)
    }

    /// Write a parse failure to stderr with colors
    pub fn write_error(&self, error: &ParseError) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(self.color_choice);
        stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stderr, "error:")?;
        stderr.reset()?;
        writeln!(stderr, " {}", error)
    }

    fn write_result<W: WriteColor>(&self, out: &mut W, result: &ParseResult) -> io::Result<()> {
        if result.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "No options or arguments")?;
            out.reset()?;
            return Ok(());
        }

        if result.options().next().is_some() {
            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "Options:")?;
            out.reset()?;
            writeln!(out)?;

            for option in result.options() {
                write_option(out, option)?;
            }
            writeln!(out)?;
        }

        let args = result.args();
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "Positional arguments:")?;
        out.reset()?;
        if args.is_empty() {
            writeln!(out, " none")?;
        } else {
            writeln!(out)?;
            writeln!(out)?;
            for (i, arg) in args.iter().enumerate() {
                writeln!(out, "  {}: {}", i, arg)?;
            }
        }

        Ok(())
    }
}

fn write_option<W: WriteColor>(out: &mut W, option: &ParsedOption) -> io::Result<()> {
    let spec = option.spec();

    write!(out, "  ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "-{}", spec.short_name())?;
    if let Some(long) = spec.long_name() {
        write!(out, ", --{}", long)?;
    }
    out.reset()?;

    if option.values().is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "  (set)")?;
        out.reset()?;
        return Ok(());
    }

    let count = option.values().len();
    writeln!(
        out,
        "  [{}]",
        if count == 1 {
            "1 value".to_string()
        } else {
            format!("{} values", count)
        }
    )?;

    if spec.value_separator().is_some() {
        for (key, value) in option.value_pairs() {
            writeln!(out, "      {} = {}", key, value)?;
        }
        if count % 2 == 1 {
            writeln!(out, "      {}", option.values()[count - 1])?;
        }
    } else {
        for value in option.values() {
            writeln!(out, "      {}", value)?;
        }
    }

    Ok(())
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::registry::{OptionRegistry, OptionSpec};

    fn registry() -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        registry.add_flag('a', Some("all"), "toggle -a").unwrap();
        registry.add_option('b', None, true, "set -b").unwrap();
        registry
            .register(
                OptionSpec::builder('k')
                    .has_args()
                    .value_separator('=')
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_format_empty_result() {
        let formatter = HumanFormatter::new(ColorChoice::Never);
        let result = parse::<&str>(&registry(), &[]).unwrap();

        let output = formatter.format(&result);
        assert!(output.contains("No options or arguments"));
    }

    #[test]
    fn test_format_flag_and_value() {
        let formatter = HumanFormatter::new(ColorChoice::Never);
        let result = parse(&registry(), &["--all", "-b", "foo"]).unwrap();

        let output = formatter.format(&result);
        assert!(output.contains("Options:"));
        assert!(output.contains("-a, --all  (set)"));
        assert!(output.contains("-b  [1 value]"));
        assert!(output.contains("      foo"));
        assert!(output.contains("Positional arguments: none"));
    }

    #[test]
    fn test_format_separator_pairs() {
        let formatter = HumanFormatter::new(ColorChoice::Never);
        let result = parse(&registry(), &["-kkey1=value1", "-k", "key2=value2"]).unwrap();

        let output = formatter.format(&result);
        assert!(output.contains("[4 values]"));
        assert!(output.contains("key1 = value1"));
        assert!(output.contains("key2 = value2"));
    }

    #[test]
    fn test_format_positional_only() {
        let formatter = HumanFormatter::new(ColorChoice::Never);
        let result = parse(&registry(), &["arg1", "arg2"]).unwrap();

        let output = formatter.format(&result);
        assert!(!output.contains("Options:"));
        assert!(output.contains("  0: arg1"));
        assert!(output.contains("  1: arg2"));
    }
}
