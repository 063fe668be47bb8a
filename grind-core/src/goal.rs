//! Goal record threaded through case splitting.

use crate::candidates::SplitState;
use crate::expr::{ExprId, MVarId};

/// A proof goal together with its split bookkeeping.
///
/// Goals are owned by the caller and passed by `&mut`. Splitting clones the
/// parent into each child, so children never share state.
#[derive(Debug, Clone)]
pub struct Goal {
    /// Metavariable standing for this goal.
    pub mvar_id: MVarId,
    /// Hypotheses introduced by case splits along the path, in order.
    pub hyps: Vec<ExprId>,
    /// Split candidates, split counter and resolved splits.
    pub split: SplitState,
}

impl Goal {
    /// Root goal with no split history.
    pub fn new(mvar_id: MVarId) -> Self {
        Self {
            mvar_id,
            hyps: Vec::new(),
            split: SplitState::new(),
        }
    }

    /// Root goal with an initial list of split candidates.
    pub fn with_candidates(mvar_id: MVarId, candidates: impl IntoIterator<Item = ExprId>) -> Self {
        let mut goal = Self::new(mvar_id);
        for e in candidates {
            goal.add_split_candidate(e);
        }
        goal
    }

    /// Queue a newly internalized split candidate.
    pub fn add_split_candidate(&mut self, e: ExprId) {
        self.split.candidates.push(e);
    }

    /// Splits performed on the path from the root goal.
    pub fn num_splits(&self) -> u32 {
        self.split.num_splits()
    }

    /// Child goal for `mvar_id` after one more split. Everything else is copied.
    pub fn child(&self, mvar_id: MVarId) -> Self {
        let mut child = self.clone();
        child.mvar_id = mvar_id;
        child.split.inc_splits();
        child
    }
}
