use serde::{Deserialize, Serialize};

use crate::core::types::{CaseMode, SymbolClass};

/// Filler symbols stripped from raw input by default
pub const DEFAULT_IGNORABLE: &str = " []";

/// Symbol used to render resolved positions by default
pub const DEFAULT_FOUND_SYMBOL: char = '_';

/// The symbol sets used to classify raw input.
///
/// The sets must be disjoint; see
/// [`validate_alphabet`](crate::utils::validation::validate_alphabet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    /// Treatment of uppercase letters
    #[serde(default)]
    pub case: CaseMode,

    /// Filler symbols removed before matching
    #[serde(default = "default_ignorable")]
    pub ignorable: Vec<char>,

    /// Sentinel for resolved positions; reserved, never valid on input
    #[serde(default = "default_found_symbol")]
    pub found_symbol: char,
}

fn default_ignorable() -> Vec<char> {
    DEFAULT_IGNORABLE.chars().collect()
}

fn default_found_symbol() -> char {
    DEFAULT_FOUND_SYMBOL
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            case: CaseMode::default(),
            ignorable: default_ignorable(),
            found_symbol: DEFAULT_FOUND_SYMBOL,
        }
    }
}

impl Alphabet {
    #[must_use]
    pub fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub fn with_ignorable(mut self, ignorable: impl IntoIterator<Item = char>) -> Self {
        self.ignorable = ignorable.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_found_symbol(mut self, found_symbol: char) -> Self {
        self.found_symbol = found_symbol;
        self
    }

    #[must_use]
    pub fn is_ignorable(&self, c: char) -> bool {
        self.ignorable.contains(&c)
    }

    #[must_use]
    pub fn is_found(&self, c: char) -> bool {
        c == self.found_symbol
    }

    #[must_use]
    pub fn is_matchable(&self, c: char) -> bool {
        self.case.accepts(c)
    }

    /// Classify a symbol into exactly one class.
    ///
    /// Ignorable wins over Found, which wins over Matchable; a valid alphabet
    /// never makes that precedence observable.
    #[must_use]
    pub fn classify(&self, c: char) -> SymbolClass {
        if self.is_ignorable(c) {
            SymbolClass::Ignorable
        } else if self.is_found(c) {
            SymbolClass::Found
        } else if self.is_matchable(c) {
            SymbolClass::Matchable
        } else {
            SymbolClass::Invalid
        }
    }

    /// Whether two matchable symbols compare equal
    #[must_use]
    pub fn same(&self, a: char, b: char) -> bool {
        self.case.same(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let alphabet = Alphabet::default();

        assert_eq!(alphabet.classify(' '), SymbolClass::Ignorable);
        assert_eq!(alphabet.classify('['), SymbolClass::Ignorable);
        assert_eq!(alphabet.classify(']'), SymbolClass::Ignorable);
        assert_eq!(alphabet.classify('_'), SymbolClass::Found);
        assert_eq!(alphabet.classify('q'), SymbolClass::Matchable);
        assert_eq!(alphabet.classify('0'), SymbolClass::Matchable);
        assert_eq!(alphabet.classify('Q'), SymbolClass::Invalid);
        assert_eq!(alphabet.classify('*'), SymbolClass::Invalid);
    }

    #[test]
    fn test_custom_sets() {
        let alphabet = Alphabet::default()
            .with_ignorable(['_'])
            .with_found_symbol('*')
            .with_case(CaseMode::Mixed);

        assert_eq!(alphabet.classify('_'), SymbolClass::Ignorable);
        assert_eq!(alphabet.classify('*'), SymbolClass::Found);
        assert_eq!(alphabet.classify('Q'), SymbolClass::Matchable);
        assert_eq!(alphabet.classify(' '), SymbolClass::Invalid);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let alphabet: Alphabet = serde_json::from_str(r#"{"case":"fold"}"#).unwrap();
        assert_eq!(alphabet.case, CaseMode::Fold);
        assert_eq!(alphabet.ignorable, vec![' ', '[', ']']);
        assert_eq!(alphabet.found_symbol, '_');
    }
}
