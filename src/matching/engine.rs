use serde::{Deserialize, Serialize};

use crate::core::alphabet::Alphabet;
use crate::core::sequence::Sequence;
use crate::core::types::Run;
use crate::matching::session::MatchSession;
use crate::utils::validation::{validate_alphabet, ValidationError, DEFAULT_CAPACITY};

/// Default shortest run length that is still resolved
pub const DEFAULT_MIN_RUN_LENGTH: usize = 3;

/// Configuration for a matching session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Shortest run length searched; passes stop below it
    pub min_run_length: usize,
    /// Symbol classification and comparison rules
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Maximum number of visible symbols per raw sequence
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
            alphabet: Alphabet::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl MatchingConfig {
    #[must_use]
    pub fn with_min_run_length(mut self, min_run_length: usize) -> Self {
        self.min_run_length = min_run_length;
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the parts of the configuration that do not depend on input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroCapacity` or
    /// `ValidationError::InvalidAlphabet`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        validate_alphabet(&self.alphabet)
    }
}

/// Result of scanning one run length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutcome {
    /// Run length searched in this pass
    pub length: usize,
    /// Whether at least one run was resolved
    pub matched: bool,
    /// Runs resolved, in the order they were found
    pub runs: Vec<Run>,
}

impl PassOutcome {
    pub fn new(length: usize, runs: Vec<Run>) -> Self {
        Self {
            length,
            matched: !runs.is_empty(),
            runs,
        }
    }
}

/// Per-length record of a finished session, longest length first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub passes: Vec<PassOutcome>,
}

impl MatchSummary {
    /// Lengths that resolved at least one run
    pub fn matched_lengths(&self) -> Vec<usize> {
        self.passes
            .iter()
            .filter(|p| p.matched)
            .map(|p| p.length)
            .collect()
    }

    pub fn any_match(&self) -> bool {
        self.passes.iter().any(|p| p.matched)
    }

    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.passes.iter().flat_map(|p| p.runs.iter())
    }

    /// Number of symbol pairs resolved across all passes
    pub fn resolved_pairs(&self) -> usize {
        self.runs().map(|r| r.length).sum()
    }
}

/// Marked sequences and summary of a finished session
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub reference: Sequence,
    pub candidate: Sequence,
    pub summary: MatchSummary,
    /// Symbol used when rendering resolved positions
    pub found_symbol: char,
}

impl MatchResult {
    pub fn reference_text(&self) -> String {
        self.reference.render(self.found_symbol)
    }

    pub fn candidate_text(&self) -> String {
        self.candidate.render(self.found_symbol)
    }
}

/// The main matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Create a new matching engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Validate a pair of raw sequences and open a session over them
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the configuration or either sequence is
    /// invalid, or the minimum run length does not fit the stripped inputs.
    pub fn session(&self, reference: &str, candidate: &str) -> Result<MatchSession, ValidationError> {
        MatchSession::new(reference, candidate, self.config.clone())
    }

    /// Run every pass to completion
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` under the same conditions as
    /// [`MatchingEngine::session`].
    pub fn run(&self, reference: &str, candidate: &str) -> Result<MatchResult, ValidationError> {
        Ok(self.session(reference, candidate)?.finish())
    }
}

/// Match two raw sequences with the default alphabet and capacity.
///
/// # Errors
///
/// Returns a `ValidationError` if either sequence holds a symbol outside the
/// default alphabet, exceeds the default capacity, or `min_run_length` is not
/// within `1..=min(stripped lengths)`.
pub fn match_sequences(
    reference: &str,
    candidate: &str,
    min_run_length: usize,
) -> Result<MatchResult, ValidationError> {
    let config = MatchingConfig::default().with_min_run_length(min_run_length);
    MatchingEngine::with_config(config).run(reference, candidate)
}
