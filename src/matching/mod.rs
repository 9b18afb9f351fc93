//! Run matching engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchingEngine`](engine::MatchingEngine): entry point that validates
//!   input and runs sessions
//! - [`MatchSession`](session::MatchSession): one reference/candidate pair,
//!   iterated pass by pass
//! - [`locate`], [`align`](align::align), [`mark`](mark::mark): the building
//!   blocks each pass is made of
//!
//! ## Matching Algorithm
//!
//! Both raw sequences are stripped of filler once. Then, for every run length
//! `L` from `min(stripped lengths)` down to the configured minimum:
//!
//! 1. **Locate**: find the next run of `L` open positions in the reference,
//!    and the first such run in the candidate
//! 2. **Align**: starting there, find the first candidate offset whose
//!    `L` pairs all compare equal, backtracking on mismatch
//! 3. **Mark**: resolve the aligned pairs in both sequences and continue
//!    scanning the reference past the run
//!
//! The search is greedy: a length is exhausted before any shorter length is
//! tried, and resolved positions are never reopened.
//!
//! ## Example
//!
//! ```rust
//! use runmatch::{MatchingConfig, MatchingEngine};
//!
//! let engine = MatchingEngine::with_config(MatchingConfig::default().with_min_run_length(2));
//! let result = engine.run("abc xy", "xyabc").unwrap();
//!
//! assert_eq!(result.reference_text(), "_____");
//! assert_eq!(result.summary.matched_lengths(), vec![3, 2]);
//! ```

pub mod align;
pub mod engine;
pub mod locate;
pub mod mark;
pub mod session;
