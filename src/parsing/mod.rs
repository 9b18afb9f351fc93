//! Reading reference/candidate pairs from files or stdin.
//!
//! ## Pair file format
//!
//! ```text
//! # comments and blank lines are skipped
//! reference: 1a [bkg]do[efe]fs
//! candidate: 1abkgdofsgs
//! ```
//!
//! Labels are optional; unlabeled lines fill the reference first, then the
//! candidate.

pub mod pair;
