use tracing::trace;

use crate::core::sequence::Sequence;
use crate::core::types::CaseMode;
use crate::matching::locate::next_matchable;

/// Find the first candidate start, at or after `candidate_from`, whose walk
/// yields `len` equal pairs against the reference walk from
/// `reference_start`.
///
/// Both walks step over resolved positions. On a mismatch the reference walk
/// restarts at `reference_start` and the next open candidate position after
/// the last tried start is tried. Returns `None` once no start remains.
pub fn align(
    reference: &Sequence,
    reference_start: usize,
    candidate: &Sequence,
    candidate_from: usize,
    len: usize,
    case: CaseMode,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let reference_start = next_matchable(reference, reference_start)?;
    let mut start = next_matchable(candidate, candidate_from)?;

    loop {
        if walk_matches(reference, reference_start, candidate, start, len, case) {
            return Some(start);
        }
        trace!(reference_start, candidate_start = start, len, "alignment retry");
        start = next_matchable(candidate, start + 1)?;
    }
}

/// Whether `len` lockstep pairs starting at two open positions all compare
/// equal. Running out of either sequence first counts as a mismatch.
fn walk_matches(
    reference: &Sequence,
    mut r: usize,
    candidate: &Sequence,
    mut c: usize,
    len: usize,
    case: CaseMode,
) -> bool {
    let mut matched = 0;

    loop {
        if !case.same(reference.symbol(r), candidate.symbol(c)) {
            return false;
        }
        matched += 1;
        if matched == len {
            return true;
        }

        match (
            next_matchable(reference, r + 1),
            next_matchable(candidate, c + 1),
        ) {
            (Some(next_r), Some(next_c)) => {
                r = next_r;
                c = next_c;
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;

    fn seq(text: &str) -> Sequence {
        Sequence::strip(text, &Alphabet::default().with_case(CaseMode::Mixed), 99)
    }

    #[test]
    fn test_align_identical() {
        let r = seq("abc");
        let c = seq("abc");
        assert_eq!(align(&r, 0, &c, 0, 3, CaseMode::Lower), Some(0));
    }

    #[test]
    fn test_align_backtracks_past_partial_match() {
        // The first 'a' matches one symbol only; the run starts at the second
        let r = seq("ab");
        let c = seq("aab");
        assert_eq!(align(&r, 0, &c, 0, 2, CaseMode::Lower), Some(1));
    }

    #[test]
    fn test_align_returns_first_full_match() {
        let r = seq("ab");
        let c = seq("xabyab");
        assert_eq!(align(&r, 0, &c, 0, 2, CaseMode::Lower), Some(1));
        assert_eq!(align(&r, 0, &c, 2, 2, CaseMode::Lower), Some(4));
    }

    #[test]
    fn test_align_fails_when_exhausted() {
        let r = seq("aab");
        let c = seq("aba");
        assert_eq!(align(&r, 0, &c, 0, 3, CaseMode::Lower), None);
        assert_eq!(align(&r, 0, &c, 0, 2, CaseMode::Lower), None);
        assert_eq!(align(&r, 1, &c, 0, 2, CaseMode::Lower), Some(0));
    }

    #[test]
    fn test_align_steps_over_found_in_candidate() {
        let r = seq("abc");
        let c = seq("ab_c");
        assert_eq!(align(&r, 0, &c, 0, 3, CaseMode::Lower), Some(0));
    }

    #[test]
    fn test_align_case_modes() {
        let r = seq("ab");
        let c = seq("AB");
        assert_eq!(align(&r, 0, &c, 0, 2, CaseMode::Mixed), None);
        assert_eq!(align(&r, 0, &c, 0, 2, CaseMode::Fold), Some(0));
    }

    #[test]
    fn test_align_zero_length() {
        let r = seq("a");
        assert_eq!(align(&r, 0, &r, 0, 0, CaseMode::Lower), None);
    }
}
