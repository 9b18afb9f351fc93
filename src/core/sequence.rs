use serde::{Deserialize, Serialize};

use crate::core::alphabet::Alphabet;
use crate::core::types::{SequenceRole, SymbolClass};
use crate::utils::validation::ValidationError;

/// Resolution status of a position in a compacted sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    Found,
}

/// A compacted symbol sequence.
///
/// Symbols are fixed once stripped; only the parallel status array changes,
/// and only from `Open` to `Found`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    symbols: Vec<char>,
    status: Vec<Status>,
}

impl Sequence {
    /// Compact `raw` by dropping every ignorable symbol.
    ///
    /// Copying stops once `capacity` symbols have been written; anything past
    /// that is silently truncated. Symbols equal to the alphabet's found
    /// sentinel come through already resolved, so stripping a rendered
    /// sequence reproduces it.
    #[must_use]
    pub fn strip(raw: &str, alphabet: &Alphabet, capacity: usize) -> Self {
        let mut symbols = Vec::with_capacity(capacity.min(raw.len()));
        let mut status = Vec::with_capacity(capacity.min(raw.len()));

        for c in raw.chars() {
            if symbols.len() >= capacity {
                break;
            }
            match alphabet.classify(c) {
                SymbolClass::Ignorable => {}
                SymbolClass::Found => {
                    symbols.push(c);
                    status.push(Status::Found);
                }
                SymbolClass::Matchable | SymbolClass::Invalid => {
                    symbols.push(c);
                    status.push(Status::Open);
                }
            }
        }

        Self { symbols, status }
    }

    /// Like [`Sequence::strip`], but refuse to truncate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::CapacityExceeded` if the compacted form of
    /// `raw` holds more than `capacity` symbols.
    pub fn strip_checked(
        raw: &str,
        alphabet: &Alphabet,
        capacity: usize,
        role: SequenceRole,
    ) -> Result<Self, ValidationError> {
        let required = raw.chars().filter(|&c| !alphabet.is_ignorable(c)).count();
        if required > capacity {
            return Err(ValidationError::CapacityExceeded {
                role,
                required,
                capacity,
            });
        }
        Ok(Self::strip(raw, alphabet, capacity))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Original symbol at `index`, regardless of status
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn status(&self, index: usize) -> Status {
        self.status[index]
    }

    /// Whether `index` is in range and still open for matching
    pub fn is_matchable(&self, index: usize) -> bool {
        matches!(self.status.get(index), Some(Status::Open))
    }

    /// Number of positions resolved so far
    pub fn found_count(&self) -> usize {
        self.status.iter().filter(|s| **s == Status::Found).count()
    }

    /// Count open positions starting at `start`, stopping at the first
    /// resolved position, the end of the sequence, or `limit`.
    pub(crate) fn open_run_len(&self, start: usize, limit: usize) -> usize {
        self.status
            .iter()
            .skip(start)
            .take(limit)
            .take_while(|s| **s == Status::Open)
            .count()
    }

    /// Resolve a position. Marking is one-way.
    pub(crate) fn set_found(&mut self, index: usize) {
        self.status[index] = Status::Found;
    }

    /// Text form with resolved positions shown as `found_symbol`
    pub fn render(&self, found_symbol: char) -> String {
        self.symbols
            .iter()
            .zip(&self.status)
            .map(|(c, s)| match s {
                Status::Open => *c,
                Status::Found => found_symbol,
            })
            .collect()
    }

    /// Text form of the compacted symbols, ignoring status
    pub fn original(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_filler() {
        let alphabet = Alphabet::default();
        let seq = Sequence::strip("1a [bkg]do[efe]", &alphabet, 99);

        assert_eq!(seq.original(), "1abkgdoefe");
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.found_count(), 0);
    }

    #[test]
    fn test_strip_truncates_at_capacity() {
        let alphabet = Alphabet::default();
        let seq = Sequence::strip("ab cd ef", &alphabet, 3);
        assert_eq!(seq.original(), "abc");
    }

    #[test]
    fn test_strip_checked_reports_capacity() {
        let alphabet = Alphabet::default();
        let err = Sequence::strip_checked("ab cd", &alphabet, 3, SequenceRole::Candidate)
            .unwrap_err();

        match err {
            ValidationError::CapacityExceeded {
                role,
                required,
                capacity,
            } => {
                assert_eq!(role, SequenceRole::Candidate);
                assert_eq!(required, 4);
                assert_eq!(capacity, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Filler does not count against capacity
        assert!(Sequence::strip_checked("a b c", &alphabet, 3, SequenceRole::Reference).is_ok());
    }

    #[test]
    fn test_strip_is_idempotent() {
        let alphabet = Alphabet::default();
        let once = Sequence::strip("[x y] z1", &alphabet, 99);
        let twice = Sequence::strip(&once.original(), &alphabet, 99);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_found_sentinel_survives_strip() {
        let alphabet = Alphabet::default();
        let seq = Sequence::strip("a_ b", &alphabet, 99);

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.status(1), Status::Found);
        assert!(!seq.is_matchable(1));
        assert_eq!(seq.render('_'), "a_b");
    }

    #[test]
    fn test_render_and_open_runs() {
        let alphabet = Alphabet::default();
        let mut seq = Sequence::strip("abcde", &alphabet, 99);
        seq.set_found(2);

        assert_eq!(seq.render('_'), "ab_de");
        assert_eq!(seq.render('*'), "ab*de");
        assert_eq!(seq.original(), "abcde");
        assert_eq!(seq.open_run_len(0, 5), 2);
        assert_eq!(seq.open_run_len(3, 5), 2);
        assert_eq!(seq.open_run_len(3, 1), 1);
        assert_eq!(seq.open_run_len(2, 5), 0);
        assert_eq!(seq.open_run_len(9, 5), 0);
        assert!(!seq.is_matchable(9));
    }
}
