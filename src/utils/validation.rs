//! Centralized validation of alphabets, raw sequences and run lengths.
//!
//! Everything here runs before stripping; once these checks pass the engine
//! has no recoverable failure modes.

use crate::core::alphabet::Alphabet;
use crate::core::types::{SequenceRole, SymbolClass};

/// Maximum number of visible symbols per sequence by default
pub const DEFAULT_CAPACITY: usize = 99;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid symbol {symbol:?} at position {position} in {role} sequence")]
    InvalidSymbol {
        role: SequenceRole,
        position: usize,
        symbol: char,
    },

    #[error(
        "Reserved found symbol {symbol:?} at position {position} in {role} sequence (output only)"
    )]
    ReservedSymbol {
        role: SequenceRole,
        position: usize,
        symbol: char,
    },

    #[error("Minimum run length {min_run_length} is out of range 1..={max}")]
    MinRunLengthOutOfRange { min_run_length: usize, max: usize },

    #[error("The {role} sequence needs {required} symbols but capacity is {capacity}")]
    CapacityExceeded {
        role: SequenceRole,
        required: usize,
        capacity: usize,
    },

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Capacity must be at least 1")]
    ZeroCapacity,
}

/// Check that the ignorable set, found sentinel and matchable alphabet are
/// pairwise disjoint.
///
/// # Errors
///
/// Returns `ValidationError::InvalidAlphabet` describing the first overlap.
pub fn validate_alphabet(alphabet: &Alphabet) -> Result<(), ValidationError> {
    if alphabet.is_matchable(alphabet.found_symbol) {
        return Err(ValidationError::InvalidAlphabet(format!(
            "found symbol {:?} is a matchable symbol",
            alphabet.found_symbol
        )));
    }

    for &c in &alphabet.ignorable {
        if c == alphabet.found_symbol {
            return Err(ValidationError::InvalidAlphabet(format!(
                "found symbol {c:?} is also ignorable"
            )));
        }
        if alphabet.is_matchable(c) {
            return Err(ValidationError::InvalidAlphabet(format!(
                "ignorable symbol {c:?} is a matchable symbol"
            )));
        }
    }

    Ok(())
}

/// Validate a raw sequence and return its stripped length.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSymbol` for symbols outside every class,
/// `ValidationError::ReservedSymbol` for the found sentinel, or
/// `ValidationError::CapacityExceeded` if the raw text is longer than
/// `capacity` symbols.
pub fn validate_sequence(
    raw: &str,
    role: SequenceRole,
    alphabet: &Alphabet,
    capacity: usize,
) -> Result<usize, ValidationError> {
    let mut stripped_len = 0;
    let mut raw_len = 0;

    for (position, symbol) in raw.chars().enumerate() {
        raw_len += 1;
        match alphabet.classify(symbol) {
            SymbolClass::Ignorable => {}
            SymbolClass::Matchable => stripped_len += 1,
            SymbolClass::Found => {
                return Err(ValidationError::ReservedSymbol {
                    role,
                    position,
                    symbol,
                })
            }
            SymbolClass::Invalid => {
                return Err(ValidationError::InvalidSymbol {
                    role,
                    position,
                    symbol,
                })
            }
        }
    }

    if raw_len > capacity {
        return Err(ValidationError::CapacityExceeded {
            role,
            required: raw_len,
            capacity,
        });
    }

    Ok(stripped_len)
}

/// Check `1 <= min_run_length <= max`.
///
/// # Errors
///
/// Returns `ValidationError::MinRunLengthOutOfRange` otherwise.
pub fn validate_min_run_length(min_run_length: usize, max: usize) -> Result<(), ValidationError> {
    if min_run_length == 0 || min_run_length > max {
        return Err(ValidationError::MinRunLengthOutOfRange {
            min_run_length,
            max,
        });
    }
    Ok(())
}
