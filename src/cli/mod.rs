//! Command-line interface module

use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::conversion::{ConversionConfig, OutputEncoding};
use crate::error::ConvertError;
use crate::parser::RecordSource;

/// Default input file name when no paths are given
pub const DEFAULT_INPUT: &str = "input.csv";
/// Default output file name when no paths are given
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "contactconv")]
#[command(about = "Convert a form-collection CSV export into the Google Contacts import format")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV file; give both paths or neither (defaults: input.csv, output.csv)
    #[arg(value_name = "INPUT", requires = "output")]
    pub input: Option<PathBuf>,

    /// Output CSV file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Contact group label for the Labels column (prompted for when omitted)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Read the CSV export from standard input
    #[arg(long, requires = "label", conflicts_with = "input")]
    pub stdin: bool,

    /// Write plain UTF-8 output without the byte-order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Abort on the first malformed data row instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Write a JSON run report (statistics and warnings) to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration: parsed arguments plus the derived conversion settings
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Combine the parsed arguments with the resolved label
    pub fn new(args: Args, label: String) -> Self {
        let output_encoding = if args.no_bom {
            OutputEncoding::Utf8
        } else {
            OutputEncoding::Utf8Bom
        };
        let conversion_config = ConversionConfig {
            label,
            output_encoding,
            strict: args.strict,
        };
        Self {
            args,
            conversion_config,
        }
    }

    /// Where the CSV export is read from
    pub fn input_source(&self) -> RecordSource {
        if self.args.stdin {
            RecordSource::Stdin
        } else {
            let path = self
                .args
                .input
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            RecordSource::File(path)
        }
    }

    /// Where the converted CSV is written
    pub fn output_path(&self) -> PathBuf {
        self.args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Ask for the contact group label and read one line from stdin.
///
/// The prompt text is only shown on an interactive terminal; piped input
/// still supplies the label as its first line, as the reference tool did.
pub fn prompt_label() -> io::Result<String> {
    if atty::is(atty::Stream::Stdin) {
        print!("Enter the contact group label (leave empty for none): ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                println!("{} {}", style("✓").green(), message);
            } else {
                println!("✓ {}", message);
            }
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        if Self::should_use_color() {
            eprintln!("{} {}", style("✗").red(), message);
        } else {
            eprintln!("✗ {}", message);
        }
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            if Self::should_use_color() {
                eprintln!("{} {}", style("⚠").yellow(), message);
            } else {
                eprintln!("⚠ {}", message);
            }
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConvertError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConvertError::Io { path: Some(_), .. } => {
            eprintln!("\nTip: Check that the file path exists and is accessible");
        }
        ConvertError::Strict(_) => {
            eprintln!("\nTip: Run without --strict to skip malformed rows instead");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'contactconv --help' for usage information.");
}
