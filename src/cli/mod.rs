//! Command-line interface for runmatch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Resolve the shared runs of a reference and a candidate
//! - **strip**: Show how a raw sequence is compacted and classified
//!
//! ## Usage
//!
//! ```text
//! # Align two sequences given on the command line
//! runmatch align "1a [bkg]do" "1abkgdo"
//!
//! # Read the pair from a file, or '-' for stdin
//! runmatch align --input pair.txt --min-run-length 2
//!
//! # JSON output for scripting
//! runmatch align --input pair.txt --format json
//! ```

use clap::{Parser, Subcommand};

use crate::core::alphabet::{Alphabet, DEFAULT_FOUND_SYMBOL, DEFAULT_IGNORABLE};
use crate::core::types::CaseMode;

pub mod align;
pub mod strip;

#[derive(Parser)]
#[command(name = "runmatch")]
#[command(version)]
#[command(about = "Correlate two symbol sequences by resolving their longest shared runs")]
#[command(
    long_about = "runmatch aligns a candidate sequence against a reference sequence.\n\nFiller symbols are stripped from both, then shared runs are resolved greedily from the longest feasible length down to a minimum:\n- Longer runs always win over shorter ones\n- Resolved positions are never matched twice\n- Every pass reports whether it resolved anything"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve shared runs between a reference and a candidate
    Align(align::AlignArgs),

    /// Strip filler from a sequence and classify its symbols
    Strip(strip::StripArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Symbol set options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct AlphabetArgs {
    /// How uppercase letters are treated
    #[arg(long, value_enum, default_value = "lower")]
    pub case: CaseMode,

    /// Filler symbols stripped before matching
    #[arg(long, default_value = DEFAULT_IGNORABLE)]
    pub ignore: String,

    /// Symbol used to show resolved positions (never valid on input)
    #[arg(long, default_value_t = DEFAULT_FOUND_SYMBOL)]
    pub found_symbol: char,
}

impl AlphabetArgs {
    pub fn to_alphabet(&self) -> Alphabet {
        Alphabet::default()
            .with_case(self.case)
            .with_ignorable(self.ignore.chars())
            .with_found_symbol(self.found_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_alphabet_defaults() {
        let cli = Cli::parse_from(["runmatch", "strip", "a b"]);
        let Commands::Strip(args) = cli.command else {
            panic!("expected strip command");
        };
        assert_eq!(args.alphabet.to_alphabet(), Alphabet::default());
    }

    #[test]
    fn test_alphabet_overrides() {
        let cli = Cli::parse_from([
            "runmatch",
            "strip",
            "a-b",
            "--ignore",
            "-",
            "--found-symbol",
            "*",
            "--case",
            "fold",
        ]);
        let Commands::Strip(args) = cli.command else {
            panic!("expected strip command");
        };
        let alphabet = args.alphabet.to_alphabet();
        assert_eq!(alphabet.ignorable, vec!['-']);
        assert_eq!(alphabet.found_symbol, '*');
        assert_eq!(alphabet.case, CaseMode::Fold);
    }
}
