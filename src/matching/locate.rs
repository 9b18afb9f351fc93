use crate::core::sequence::Sequence;

/// Smallest index `>= from` that is still open for matching.
pub fn next_matchable(seq: &Sequence, from: usize) -> Option<usize> {
    (from..seq.len()).find(|&i| seq.is_matchable(i))
}

/// Smallest index `>= from` that begins `min_len` consecutive open positions.
///
/// A resolved position ends a run in progress; it is never skipped over.
/// When the run at the current start is too short, scanning resumes at the
/// next open position past the break.
pub fn next_run_start(seq: &Sequence, from: usize, min_len: usize) -> Option<usize> {
    let mut start = next_matchable(seq, from)?;

    loop {
        let run = seq.open_run_len(start, min_len);
        if run == min_len {
            return Some(start);
        }
        start = next_matchable(seq, start + run + 1)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;

    fn seq(text: &str) -> Sequence {
        Sequence::strip(text, &Alphabet::default(), 99)
    }

    #[test]
    fn test_next_matchable() {
        let s = seq("ab_c__d");

        assert_eq!(next_matchable(&s, 0), Some(0));
        assert_eq!(next_matchable(&s, 2), Some(3));
        assert_eq!(next_matchable(&s, 4), Some(6));
        assert_eq!(next_matchable(&s, 7), None);
        assert_eq!(next_matchable(&s, 100), None);
    }

    #[test]
    fn test_next_matchable_all_found() {
        assert_eq!(next_matchable(&seq("___"), 0), None);
        assert_eq!(next_matchable(&seq(""), 0), None);
    }

    #[test]
    fn test_run_start_found_breaks_run() {
        let s = seq("ab_cde_fg");

        assert_eq!(next_run_start(&s, 0, 2), Some(0));
        assert_eq!(next_run_start(&s, 0, 3), Some(3));
        assert_eq!(next_run_start(&s, 1, 2), Some(3));
        assert_eq!(next_run_start(&s, 4, 2), Some(4));
        assert_eq!(next_run_start(&s, 5, 2), Some(7));
        assert_eq!(next_run_start(&s, 0, 4), None);
    }

    #[test]
    fn test_run_start_from_inside_run() {
        let s = seq("abcd");

        assert_eq!(next_run_start(&s, 1, 3), Some(1));
        assert_eq!(next_run_start(&s, 2, 3), None);
        assert_eq!(next_run_start(&s, 0, 4), Some(0));
        assert_eq!(next_run_start(&s, 0, 5), None);
    }

    #[test]
    fn test_run_start_single_symbol() {
        let s = seq("_a_");
        assert_eq!(next_run_start(&s, 0, 1), Some(1));
        assert_eq!(next_run_start(&s, 2, 1), None);
    }
}
