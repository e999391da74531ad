//! Formatting CLI Application.
//!
//! This binary provides a command-line interface for the formatkit library:
//! formatting values by tag, applying masks and normalizing numbers or dates,
//! either from arguments or one value per line from a file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use formatkit::{apply_mask, format, normalize_date, normalize_number, FormatError, FormatTag};
use formatkit::normalize::normalize_number_with_signs;

/// Value formatting tool
///
/// Format Brazilian documents, money, byte sizes and dates, apply digit masks
/// and normalize loosely-written numbers and dates.
#[derive(Parser)]
#[command(name = "formatkit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format values with a named type, numeric pattern, mask or template
    Format {
        /// Formatting type (cpf, cnpj, cpfcnpj, cep, phone, money, bytes, date, ...)
        /// or a pattern such as "0.000,00", "##/##" or "Valor {00}"
        #[arg(short, long = "type", value_name = "TYPE")]
        tag: String,

        #[command(flatten)]
        io: ValueSource,
    },

    /// Lay the digits of each value into a '#' mask
    Mask {
        /// Mask pattern, e.g. "###.###.###-##"
        #[arg(short, long, value_name = "PATTERN")]
        pattern: String,

        /// Never print literals after the last digit
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        io: ValueSource,
    },

    /// Normalize numbers or dates
    Normalize {
        #[command(subcommand)]
        kind: NormalizeKind,
    },
}

#[derive(Subcommand)]
enum NormalizeKind {
    /// Canonical dot-decimal number
    Number {
        /// Keep a leading + or - sign
        #[arg(long)]
        signs: bool,

        #[command(flatten)]
        io: ValueSource,
    },

    /// Canonical day/month/year date
    Date {
        /// Zero-pad day and month to two digits
        #[arg(long)]
        zero_pad: bool,

        #[command(flatten)]
        io: ValueSource,
    },
}

/// Where values come from and where results go.
#[derive(clap::Args)]
struct ValueSource {
    /// Values to process
    #[arg(value_name = "VALUE")]
    values: Vec<String>,

    /// Read values from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write results to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl ValueSource {
    /// Collects values from arguments followed by the input file's lines.
    fn collect(&self) -> Result<Vec<String>> {
        let mut values = self.values.clone();

        if let Some(input) = &self.input {
            if !input.exists() {
                anyhow::bail!("Input file does not exist: {}", input.display());
            }
            let text = std::fs::read_to_string(input).map_err(|source| FormatError::Io {
                path: input.clone(),
                source,
            })?;
            values.extend(text.lines().map(str::to_string));
        }

        if values.is_empty() {
            anyhow::bail!("No values given. Pass VALUE arguments or --input FILE.");
        }

        Ok(values)
    }
}

/// Runs one operation over every value and emits the results.
struct BatchHandler {
    verbose: bool,
}

impl BatchHandler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn run<F>(&self, source: &ValueSource, mut operation: F) -> Result<()>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let values = source.collect()?;
        if self.verbose {
            eprintln!("Values: {} value(s)", values.len());
        }

        let mut results = Vec::with_capacity(values.len());
        for value in &values {
            let result = operation(value).with_context(|| format!("Failed to process '{}'", value))?;
            results.push(result);
        }

        self.emit(&results, source.output.as_deref())
    }

    fn emit(&self, results: &[String], output: Option<&Path>) -> Result<()> {
        let mut text = results.join("\n");
        text.push('\n');

        if let Some(output_path) = output {
            std::fs::write(output_path, &text).map_err(|source| FormatError::Io {
                path: output_path.to_path_buf(),
                source,
            })?;
            if self.verbose {
                eprintln!("✓ Wrote {} result(s) → {}", results.len(), output_path.display());
            }
        } else {
            print!("{}", text);
        }

        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let handler = BatchHandler::new(cli.verbose);

    match &cli.command {
        Commands::Format { tag, io } => {
            let tag = FormatTag::resolve(tag)?;
            handler.run(io, |value| Ok(format(value, &tag)?))?;
        }
        Commands::Mask {
            pattern,
            strict,
            io,
        } => {
            handler.run(io, |value| Ok(apply_mask(value, pattern, *strict)?))?;
        }
        Commands::Normalize { kind } => match kind {
            NormalizeKind::Number { signs, io } => {
                handler.run(io, |value| {
                    Ok(if *signs {
                        normalize_number_with_signs(value)
                    } else {
                        normalize_number(value)
                    })
                })?;
            }
            NormalizeKind::Date { zero_pad, io } => {
                handler.run(io, |value| Ok(normalize_date(value, *zero_pad)))?;
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_format() {
        let cli = Cli::try_parse_from(["formatkit", "format", "--type", "cpf", "12345678901"])
            .expect("valid arguments");
        match cli.command {
            Commands::Format { tag, io } => {
                assert_eq!(tag, "cpf");
                assert_eq!(io.values, vec!["12345678901".to_string()]);
            }
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn test_collect_requires_values() {
        let source = ValueSource {
            values: Vec::new(),
            input: None,
            output: None,
        };
        assert!(source.collect().is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
