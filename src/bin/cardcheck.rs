//! CLI tool for credit card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! cardcheck validate 4532015112830366
//!
//! # Validate the built-in sample cards
//! cardcheck samples --output json
//!
//! # Validate one number per line from a file (or stdin)
//! cardcheck batch cards.txt
//!
//! # Prompt for numbers until 'quit'
//! cardcheck interactive
//! ```
//!
//! Logs go to stderr and are controlled by `RUST_LOG`.

use cardcheck::batch::BatchSummary;
use cardcheck::stream::ValidateExt;
use cardcheck::{mask_last_four, validate, ValidationResult};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Cards validated by `cardcheck samples`.
const SAMPLE_CARDS: [&str; 7] = [
    "4532015112830366", // Visa
    "5425233010103442", // MasterCard
    "374245455400126",  // American Express
    "6011111111111117", // Discover
    "3530111333300000", // JCB
    "4111111111111111", // Visa
    "1234567890123456", // Invalid
];

const EXIT_INVALID: u8 = 1;
const EXIT_IO_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "cardcheck")]
#[command(author, version, about = "Credit card number validation tool")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a credit card number
    Validate {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate the built-in sample card numbers
    Samples {
        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate one card number per line and print a summary
    Batch {
        /// File to read; stdin if omitted
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Prompt for card numbers until EOF, an empty line or 'quit'
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One rendered validation, with the card number masked.
#[derive(Serialize)]
struct Report<'a> {
    card: String,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

impl<'a> Report<'a> {
    fn new(card: &str, result: &'a ValidationResult) -> Self {
        Self {
            card: mask_last_four(card),
            result,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => cmd_validate(&card_number, output),
        Commands::Samples { output } => cmd_samples(output),
        Commands::Batch { file, output } => cmd_batch(file, output),
        Commands::Interactive => {
            run_interactive(io::stdin().lock(), io::stdout().lock()).map(|()| ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "I/O failure");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_IO_ERROR)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn cmd_validate(card_number: &str, output: OutputFormat) -> io::Result<ExitCode> {
    let result = validate(card_number);
    let mut out = io::stdout().lock();
    render(&mut out, card_number, &result, output)?;

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

fn cmd_samples(output: OutputFormat) -> io::Result<ExitCode> {
    let mut out = io::stdout().lock();
    for (card, result) in SAMPLE_CARDS.iter().copied().validate_pairs() {
        render(&mut out, card, &result, output)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_batch(file: Option<PathBuf>, output: OutputFormat) -> io::Result<ExitCode> {
    let input: Box<dyn BufRead> = match file {
        Some(path) => {
            debug!(path = %path.display(), "reading card numbers");
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(io::stdin().lock()),
    };

    let summary = run_batch(input, io::stdout().lock(), output)?;
    Ok(if summary.invalid() == 0 && summary.rejected() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

/// Validates every non-blank line, renders each result and then the summary.
fn run_batch<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    output: OutputFormat,
) -> io::Result<BatchSummary> {
    let lines: Vec<String> = input
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect::<io::Result<_>>()?;

    let mut summary = BatchSummary::new();
    for (card, result) in lines.iter().validate_pairs() {
        render(&mut out, card, &result, output)?;
        summary.record(&result);
    }

    if let OutputFormat::Text = output {
        writeln!(
            out,
            "Total: {}  Valid: {}  Invalid: {}  Rejected: {}",
            summary.total(),
            summary.valid(),
            summary.invalid(),
            summary.rejected()
        )?;
    }
    Ok(summary)
}

/// Prompts for card numbers and validates each one.
///
/// Stops at EOF, on an empty line, or when the user types `quit`.
fn run_interactive<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "Enter a card number (or 'quit'): ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let result = validate(line);
        writeln!(out)?;
        render(&mut out, line, &result, OutputFormat::Text)?;
    }
    writeln!(out)?;
    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    card: &str,
    result: &ValidationResult,
    output: OutputFormat,
) -> io::Result<()> {
    match output {
        OutputFormat::Text => {
            writeln!(out, "Card: {}", mask_last_four(card))?;
            writeln!(out, "Brand: {}", result.brand())?;
            writeln!(
                out,
                "Valid (Luhn): {}",
                if result.is_valid() { "yes" } else { "no" }
            )?;
            if let Some(message) = result.error_message() {
                writeln!(out, "Error: {}", message)?;
            }
            writeln!(out)
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &Report::new(card, result))?;
            writeln!(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcheck::CardBrand;
    use std::io::Cursor;

    fn rendered(card: &str, output: OutputFormat) -> String {
        let mut out = Vec::new();
        render(&mut out, card, &validate(card), output).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_text_masks_card() {
        let text = rendered("4532015112830366", OutputFormat::Text);
        assert!(text.contains("Card: ****0366"));
        assert!(text.contains("Brand: Visa"));
        assert!(text.contains("Valid (Luhn): yes"));
        assert!(!text.contains("4532015112830366"));
    }

    #[test]
    fn test_render_text_error() {
        let text = rendered("4532-abcd", OutputFormat::Text);
        assert!(text.contains("Brand: unknown"));
        assert!(text.contains("Error: card must contain only digits"));
    }

    #[test]
    fn test_render_json() {
        let text = rendered("374245455400126", OutputFormat::Json);
        let json: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(json["card"], "****0126");
        assert_eq!(json["brand"], "American Express");
        assert_eq!(json["is_valid"], true);
        assert!(json["error_message"].is_null());
    }

    #[test]
    fn test_interactive_stops_on_quit() {
        let input = Cursor::new("4111111111111111\nQUIT\n4532015112830366\n");
        let mut out = Vec::new();
        run_interactive(input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("****1111"));
        assert!(!text.contains("****0366"));
    }

    #[test]
    fn test_interactive_stops_on_empty_line() {
        let input = Cursor::new("\n4111111111111111\n");
        let mut out = Vec::new();
        run_interactive(input, &mut out).unwrap();

        assert!(!String::from_utf8(out).unwrap().contains("Brand:"));
    }

    #[test]
    fn test_batch_summary() {
        let input = Cursor::new("4111111111111111\n\n1234567890123456\nnope\n");
        let mut out = Vec::new();
        let summary = run_batch(input, &mut out, OutputFormat::Text).unwrap();

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.valid(), 1);
        assert_eq!(summary.invalid(), 1);
        assert_eq!(summary.rejected(), 1);
        assert_eq!(summary.count(CardBrand::Visa), 1);
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Total: 3  Valid: 1  Invalid: 1  Rejected: 1"));
    }

    #[test]
    fn test_samples_are_all_numeric() {
        assert!(SAMPLE_CARDS
            .iter()
            .all(|card| validate(card).error().is_none()));
    }
}
