use std::path::PathBuf;

use clap::Args;

use crate::cli::{AlphabetArgs, OutputFormat};
use crate::matching::engine::{
    MatchResult, MatchingConfig, MatchingEngine, PassOutcome, DEFAULT_MIN_RUN_LENGTH,
};
use crate::parsing::pair::{read_pair, SequencePair};
use crate::utils::validation::DEFAULT_CAPACITY;

#[derive(Args)]
pub struct AlignArgs {
    /// Reference sequence text
    #[arg(conflicts_with = "input", required_unless_present = "input")]
    pub reference: Option<String>,

    /// Candidate sequence text
    #[arg(conflicts_with = "input", required_unless_present = "input")]
    pub candidate: Option<String>,

    /// Pair file holding the reference and candidate lines
    /// Use '-' for stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Shortest run length to resolve
    #[arg(short, long, default_value_t = DEFAULT_MIN_RUN_LENGTH)]
    pub min_run_length: usize,

    /// Maximum number of visible symbols per sequence
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    #[command(flatten)]
    pub alphabet: AlphabetArgs,
}

/// Marked sequences as they stood right after one pass
struct PassSnapshot {
    pass: PassOutcome,
    reference: String,
    candidate: String,
}

/// Execute align subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
#[allow(clippy::while_let_on_iterator)] // session is inspected between passes
pub fn run(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pair = resolve_pair(&args)?;

    let config = MatchingConfig {
        min_run_length: args.min_run_length,
        alphabet: args.alphabet.to_alphabet(),
        capacity: args.capacity,
    };
    let found_symbol = config.alphabet.found_symbol;
    let engine = MatchingEngine::with_config(config);
    let mut session = engine.session(&pair.reference, &pair.candidate)?;

    let mut snapshots = Vec::new();
    while let Some(pass) = session.next() {
        if verbose {
            eprintln!(
                "Length {}: {} run(s) resolved",
                pass.length,
                pass.runs.len()
            );
        }
        snapshots.push(PassSnapshot {
            pass,
            reference: session.reference().render(found_symbol),
            candidate: session.candidate().render(found_symbol),
        });
    }
    let result = session.finish();

    match format {
        OutputFormat::Text => print_text(&pair, &snapshots, &result),
        OutputFormat::Json => print_json(&pair, engine.config(), &snapshots, &result)?,
        OutputFormat::Tsv => print_tsv(&snapshots),
    }

    Ok(())
}

fn resolve_pair(args: &AlignArgs) -> anyhow::Result<SequencePair> {
    match (&args.input, &args.reference, &args.candidate) {
        (Some(path), _, _) => Ok(read_pair(path)?),
        (None, Some(reference), Some(candidate)) => Ok(SequencePair {
            reference: reference.clone(),
            candidate: candidate.clone(),
        }),
        _ => anyhow::bail!("Provide REFERENCE and CANDIDATE, or --input"),
    }
}

fn print_text(pair: &SequencePair, snapshots: &[PassSnapshot], result: &MatchResult) {
    println!("Input:");
    println!("  reference: {}", pair.reference);
    println!("  candidate: {}", pair.candidate);

    println!("\nStripped:");
    println!("  reference: {}", result.reference.original());
    println!("  candidate: {}", result.candidate.original());

    for snapshot in snapshots.iter().filter(|s| s.pass.matched) {
        println!("\nPass: len {}", snapshot.pass.length);
        println!("  reference: {}", snapshot.reference);
        println!("  candidate: {}", snapshot.candidate);
    }

    println!("\nResults:");
    println!("  reference: {}", result.reference_text());
    println!("  candidate: {}", result.candidate_text());

    let matched = result.summary.matched_lengths();
    if matched.is_empty() {
        println!("  Matched lengths: none");
    } else {
        let lengths: Vec<String> = matched.iter().map(ToString::to_string).collect();
        println!("  Matched lengths: {}", lengths.join(", "));
    }
    println!(
        "  Resolved: {} of {} reference symbols",
        result.summary.resolved_pairs(),
        result.reference.len()
    );
}

fn print_json(
    pair: &SequencePair,
    config: &MatchingConfig,
    snapshots: &[PassSnapshot],
    result: &MatchResult,
) -> anyhow::Result<()> {
    let passes: Vec<serde_json::Value> = snapshots
        .iter()
        .map(|s| {
            serde_json::json!({
                "length": s.pass.length,
                "matched": s.pass.matched,
                "runs": s.pass.runs,
                "reference": s.reference,
                "candidate": s.candidate,
            })
        })
        .collect();

    let output = serde_json::json!({
        "input": {
            "reference": pair.reference,
            "candidate": pair.candidate,
        },
        "config": config,
        "stripped": {
            "reference": result.reference.original(),
            "candidate": result.candidate.original(),
        },
        "passes": passes,
        "result": {
            "reference": result.reference_text(),
            "candidate": result.candidate_text(),
            "matched_lengths": result.summary.matched_lengths(),
            "resolved_pairs": result.summary.resolved_pairs(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(snapshots: &[PassSnapshot]) {
    println!("length\tmatched\truns\treference\tcandidate");
    for s in snapshots {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            s.pass.length,
            s.pass.matched,
            s.pass.runs.len(),
            s.reference,
            s.candidate,
        );
    }
}
