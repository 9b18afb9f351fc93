//! The pass-by-pass driver.
//!
//! A session moves `Ready -> Stripping -> Scanning(L)... -> Done`. Each call
//! to [`Iterator::next`] completes one length and yields its
//! [`PassOutcome`]; the sequences can be inspected between passes.

use tracing::{debug, trace};

use crate::core::sequence::Sequence;
use crate::core::types::{Run, SequenceRole};
use crate::matching::align::align;
use crate::matching::engine::{MatchResult, MatchSummary, MatchingConfig, PassOutcome};
use crate::matching::locate::next_run_start;
use crate::matching::mark::mark;
use crate::utils::validation::{validate_min_run_length, validate_sequence, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Ready { reference: String, candidate: String },
    Scanning { length: usize },
    Done,
}

/// One reference/candidate pair being matched
#[derive(Debug, Clone)]
pub struct MatchSession {
    config: MatchingConfig,
    state: State,
    reference: Sequence,
    candidate: Sequence,
    passes: Vec<PassOutcome>,
}

impl MatchSession {
    /// Validate both raw sequences against `config`.
    ///
    /// Nothing is stripped or matched until the first pass is requested.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the configuration or either sequence is
    /// invalid, or `config.min_run_length` is outside
    /// `1..=min(stripped lengths)`.
    pub fn new(
        reference: &str,
        candidate: &str,
        config: MatchingConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;

        let reference_len = validate_sequence(
            reference,
            SequenceRole::Reference,
            &config.alphabet,
            config.capacity,
        )?;
        let candidate_len = validate_sequence(
            candidate,
            SequenceRole::Candidate,
            &config.alphabet,
            config.capacity,
        )?;
        validate_min_run_length(config.min_run_length, reference_len.min(candidate_len))?;

        Ok(Self {
            config,
            state: State::Ready {
                reference: reference.to_string(),
                candidate: candidate.to_string(),
            },
            reference: Sequence::default(),
            candidate: Sequence::default(),
            passes: Vec::new(),
        })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Compacted reference; empty until the first pass
    pub fn reference(&self) -> &Sequence {
        &self.reference
    }

    /// Compacted candidate; empty until the first pass
    pub fn candidate(&self) -> &Sequence {
        &self.candidate
    }

    /// Passes completed so far
    pub fn passes(&self) -> &[PassOutcome] {
        &self.passes
    }

    /// Length the next pass will search, once stripping has happened
    pub fn next_length(&self) -> Option<usize> {
        match self.state {
            State::Scanning { length } => Some(length),
            State::Ready { .. } | State::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Run any remaining passes and hand back the marked sequences
    pub fn finish(mut self) -> MatchResult {
        self.by_ref().for_each(drop);

        MatchResult {
            reference: self.reference,
            candidate: self.candidate,
            summary: MatchSummary {
                passes: self.passes,
            },
            found_symbol: self.config.alphabet.found_symbol,
        }
    }

    /// Compact both raw sequences and pick the first length to search
    fn strip(&mut self, reference: &str, candidate: &str) -> State {
        let alphabet = &self.config.alphabet;
        self.reference = Sequence::strip(reference, alphabet, self.config.capacity);
        self.candidate = Sequence::strip(candidate, alphabet, self.config.capacity);

        let longest = self.reference.len().min(self.candidate.len());
        debug!(
            reference_len = self.reference.len(),
            candidate_len = self.candidate.len(),
            "stripped sequences"
        );

        self.state_for(longest)
    }

    fn state_for(&self, length: usize) -> State {
        if length >= self.config.min_run_length {
            State::Scanning { length }
        } else {
            State::Done
        }
    }

    /// Resolve every run of exactly `length` reachable from the left.
    ///
    /// The reference cursor moves past a resolved run on success and by one
    /// position on failure. Candidate runs are always searched from the
    /// start, since earlier passes may have changed what is open there.
    fn scan_length(&mut self, length: usize) -> PassOutcome {
        let case = self.config.alphabet.case;
        let mut cursor = 0;
        let mut runs = Vec::new();

        while let Some(reference_start) = next_run_start(&self.reference, cursor, length) {
            let Some(candidate_from) = next_run_start(&self.candidate, 0, length) else {
                break;
            };

            match align(
                &self.reference,
                reference_start,
                &self.candidate,
                candidate_from,
                length,
                case,
            ) {
                Some(candidate_start) => {
                    let run = Run {
                        reference_start,
                        candidate_start,
                        length,
                    };
                    trace!(reference_start, candidate_start, length, "resolved run");
                    cursor = mark(&mut self.reference, &mut self.candidate, run, case);
                    runs.push(run);
                }
                None => cursor = reference_start + 1,
            }
        }

        debug!(length, runs = runs.len(), "pass complete");
        PassOutcome::new(length, runs)
    }
}

impl Iterator for MatchSession {
    type Item = PassOutcome;

    fn next(&mut self) -> Option<PassOutcome> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Ready {
                    reference,
                    candidate,
                } => {
                    self.state = self.strip(&reference, &candidate);
                }
                State::Scanning { length } => {
                    let outcome = self.scan_length(length);
                    self.state = self.state_for(length - 1);
                    self.passes.push(outcome.clone());
                    return Some(outcome);
                }
                State::Done => return None,
            }
        }
    }
}
