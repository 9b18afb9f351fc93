use clap::Args;

use crate::cli::{AlphabetArgs, OutputFormat};
use crate::core::alphabet::Alphabet;
use crate::core::sequence::Sequence;
use crate::core::types::{SequenceRole, SymbolClass};
use crate::utils::validation::{validate_alphabet, DEFAULT_CAPACITY};

#[derive(Args)]
pub struct StripArgs {
    /// Raw sequence text
    #[arg(required = true)]
    pub text: String,

    /// Maximum number of stripped symbols
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    #[command(flatten)]
    pub alphabet: AlphabetArgs,
}

/// Symbol class counts of one raw sequence
#[derive(Debug, Default, PartialEq, Eq, serde::Serialize)]
struct ClassCounts {
    ignorable: usize,
    found: usize,
    matchable: usize,
    invalid: usize,
}

impl ClassCounts {
    fn tally(text: &str, alphabet: &Alphabet) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            match alphabet.classify(c) {
                SymbolClass::Ignorable => counts.ignorable += 1,
                SymbolClass::Found => counts.found += 1,
                SymbolClass::Matchable => counts.matchable += 1,
                SymbolClass::Invalid => counts.invalid += 1,
            }
        }
        counts
    }
}

/// Execute strip subcommand
///
/// # Errors
///
/// Returns an error if the alphabet options overlap or the stripped text
/// does not fit the capacity.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StripArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let alphabet = args.alphabet.to_alphabet();
    validate_alphabet(&alphabet)?;

    let counts = ClassCounts::tally(&args.text, &alphabet);
    let stripped =
        Sequence::strip_checked(&args.text, &alphabet, args.capacity, SequenceRole::Reference)?;

    if verbose && counts.invalid > 0 {
        eprintln!(
            "Warning: {} symbol(s) would be rejected as invalid input",
            counts.invalid
        );
    }

    match format {
        OutputFormat::Text => {
            println!("Stripped: {}", stripped.render(alphabet.found_symbol));
            println!("  Length: {}", stripped.len());
            println!("  Ignorable: {}", counts.ignorable);
            println!("  Matchable: {}", counts.matchable);
            println!("  Found: {}", counts.found);
            println!("  Invalid: {}", counts.invalid);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.text,
                "stripped": stripped.render(alphabet.found_symbol),
                "length": stripped.len(),
                "classes": counts,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("stripped\tlength\tignorable\tmatchable\tfound\tinvalid");
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                stripped.render(alphabet.found_symbol),
                stripped.len(),
                counts.ignorable,
                counts.matchable,
                counts.found,
                counts.invalid,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_every_class() {
        let counts = ClassCounts::tally("a [b]_C1", &Alphabet::default());

        assert_eq!(
            counts,
            ClassCounts {
                ignorable: 3,
                found: 1,
                matchable: 3,
                invalid: 1,
            }
        );
    }
}
