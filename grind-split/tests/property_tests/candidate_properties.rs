//! Property-based tests for the split candidate queue
//!
//! Tests:
//! - drain/refill round trip
//! - refill goes in front of later pushes

use grind_core::{ExprId, SplitCandidates};
use proptest::prelude::*;

proptest! {
    /// Refilling everything that was drained restores the queue.
    #[test]
    fn drain_refill_is_identity(ids in prop::collection::vec(0u32..1000, 0..32)) {
        let mut queue: SplitCandidates = ids.iter().copied().map(ExprId).collect();
        let before: Vec<ExprId> = queue.iter().collect();

        let drained = queue.drain();
        prop_assert!(queue.is_empty());
        prop_assert_eq!(&drained, &before);

        queue.refill(drained);
        prop_assert_eq!(queue.iter().collect::<Vec<_>>(), before);
    }

    /// Candidates internalized during a round land behind the refilled ones.
    #[test]
    fn refill_precedes_new_pushes(
        kept in prop::collection::vec(0u32..100, 0..16),
        fresh in prop::collection::vec(100u32..200, 0..16),
    ) {
        let mut queue = SplitCandidates::new();
        for &e in &fresh {
            queue.push(ExprId(e));
        }
        queue.refill(kept.iter().copied().map(ExprId).collect());

        let expected: Vec<ExprId> = kept.iter().chain(&fresh).copied().map(ExprId).collect();
        prop_assert_eq!(queue.iter().collect::<Vec<_>>(), expected);
    }
}
