//! Core data types for run matching.
//!
//! - [`Alphabet`](alphabet::Alphabet): classifies raw symbols as ignorable,
//!   found, matchable, or invalid
//! - [`Sequence`](sequence::Sequence): a compacted symbol array with a
//!   parallel resolution status array
//! - [`Run`](types::Run), [`CaseMode`](types::CaseMode),
//!   [`SequenceRole`](types::SequenceRole): small shared value types
//!
//! ## Symbol classes
//!
//! | Class     | Default members      | Fate                         |
//! |-----------|----------------------|------------------------------|
//! | Ignorable | space, `[`, `]`      | dropped by stripping         |
//! | Found     | `_`                  | output only; reserved        |
//! | Matchable | `a-z`, `0-9`         | compared and resolved        |
//! | Invalid   | everything else      | rejected before matching     |

pub mod alphabet;
pub mod sequence;
pub mod types;
