//! # runmatch
//!
//! A library for correlating two symbol sequences by resolving their longest
//! shared runs.
//!
//! Two encodings of the same token set rarely line up exactly: one side may
//! have gaps, filler, or substituted symbols. `runmatch` strips the filler,
//! then greedily resolves shared runs from the longest feasible length down to
//! a configured minimum, so the overlapping structure of the two sides
//! becomes visible.
//!
//! ## Features
//!
//! - **Filler stripping**: Configurable ignorable symbols are dropped up front
//! - **Longest-first resolution**: Longer shared runs always win
//! - **Backtracking alignment**: A reference run is tried against successive
//!   candidate offsets until one matches in full
//! - **Monotonic marking**: Resolved positions are never matched twice
//! - **Pass-by-pass reporting**: Every run length reports whether it matched
//!
//! ## Example
//!
//! ```rust
//! use runmatch::match_sequences;
//!
//! let result = match_sequences("1a [bkg]do", "1abkgdo", 3).unwrap();
//!
//! assert_eq!(result.reference_text(), "_______");
//! assert_eq!(result.summary.matched_lengths(), vec![7]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Symbol classification, sequences, and shared value types
//! - [`matching`]: Locating, aligning, and marking runs; the session driver
//! - [`parsing`]: Reading reference/candidate pairs from files
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input validation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::Alphabet;
pub use crate::core::sequence::{Sequence, Status};
pub use crate::core::types::*;
pub use crate::matching::engine::{
    match_sequences, MatchResult, MatchSummary, MatchingConfig, MatchingEngine, PassOutcome,
};
pub use crate::matching::session::MatchSession;
pub use crate::utils::validation::ValidationError;
