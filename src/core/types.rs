use serde::{Deserialize, Serialize};

/// Which side of a matching session a sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceRole {
    Reference,
    Candidate,
}

impl std::fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Candidate => write!(f, "candidate"),
        }
    }
}

/// Class of a single symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolClass {
    /// Structural filler, dropped before matching
    Ignorable,
    /// Already resolved by an earlier pass
    Found,
    /// Eligible for comparison
    Matchable,
    /// Outside every accepted set; must be rejected before matching
    Invalid,
}

/// How uppercase letters are treated by the classifier and comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Only `a-z` and `0-9` are matchable; uppercase is invalid input
    #[default]
    Lower,
    /// `A-Z` is matchable too and compared exactly
    Mixed,
    /// `A-Z` is matchable too and compared ignoring case
    Fold,
}

impl CaseMode {
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Lower => c.is_ascii_lowercase() || c.is_ascii_digit(),
            Self::Mixed | Self::Fold => c.is_ascii_alphanumeric(),
        }
    }

    /// Whether two matchable symbols compare equal under this mode
    #[must_use]
    pub fn same(self, a: char, b: char) -> bool {
        match self {
            Self::Fold => a.eq_ignore_ascii_case(&b),
            Self::Lower | Self::Mixed => a == b,
        }
    }
}

/// A confirmed alignment of `length` symbol pairs.
///
/// Both starts index into the compacted sequences. The reference side is
/// contiguous; the candidate side may step over positions resolved by
/// earlier passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub reference_start: usize,
    pub candidate_start: usize,
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_rejects_uppercase() {
        assert!(CaseMode::Lower.accepts('a'));
        assert!(CaseMode::Lower.accepts('7'));
        assert!(!CaseMode::Lower.accepts('A'));
        assert!(!CaseMode::Lower.accepts('-'));
    }

    #[test]
    fn test_mixed_and_fold_accept_uppercase() {
        assert!(CaseMode::Mixed.accepts('Q'));
        assert!(CaseMode::Fold.accepts('Q'));
        assert!(!CaseMode::Fold.accepts('é'));
    }

    #[test]
    fn test_same_respects_case_mode() {
        assert!(!CaseMode::Mixed.same('a', 'A'));
        assert!(CaseMode::Fold.same('a', 'A'));
        assert!(CaseMode::Lower.same('3', '3'));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(SequenceRole::Reference.to_string(), "reference");
        assert_eq!(SequenceRole::Candidate.to_string(), "candidate");
    }
}
