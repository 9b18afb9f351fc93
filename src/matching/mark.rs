use crate::core::sequence::Sequence;
use crate::core::types::{CaseMode, Run};
use crate::matching::locate::next_matchable;

/// Resolve the `run.length` pairs of an aligned run in both sequences.
///
/// Returns the reference index just past the last resolved position.
///
/// # Panics
///
/// Panics if the run was not produced by [`align`](crate::matching::align::align)
/// on the current state of both sequences: a start that is not open, a walk
/// that runs off either end, or a pair that does not compare equal. The
/// sequences must not be used after such a failure.
pub fn mark(reference: &mut Sequence, candidate: &mut Sequence, run: Run, case: CaseMode) -> usize {
    assert!(
        reference.is_matchable(run.reference_start) && candidate.is_matchable(run.candidate_start),
        "run start is not open: {run:?}"
    );

    let mut reference_from = run.reference_start;
    let mut candidate_from = run.candidate_start;

    for step in 0..run.length {
        let (Some(r), Some(c)) = (
            next_matchable(reference, reference_from),
            next_matchable(candidate, candidate_from),
        ) else {
            panic!("run ran out of open positions at step {step}: {run:?}");
        };

        assert!(
            case.same(reference.symbol(r), candidate.symbol(c)),
            "unequal pair at reference {r} / candidate {c}: {run:?}"
        );

        reference.set_found(r);
        candidate.set_found(c);
        reference_from = r + 1;
        candidate_from = c + 1;
    }

    reference_from
}
