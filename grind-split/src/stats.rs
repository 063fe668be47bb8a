//! Case-split statistics.

/// Counters kept by a [`crate::SplitEngine`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Calls to `select_next_split` that scanned the queue.
    pub selections: u64,
    /// Candidates classified and status-checked.
    pub candidates_scanned: u64,
    /// Candidates dropped as resolved or not splittable.
    pub resolved_dropped: u64,
    /// Candidates requeued because they were not ready.
    pub not_ready_requeued: u64,
    /// Ready candidates requeued because a better one was found.
    pub ready_deferred: u64,
    /// Selections abandoned because the split budget was spent.
    pub budget_exhausted: u64,
    /// Splits performed.
    pub splits_performed: u64,
    /// Goals produced by splits.
    pub subgoals_produced: u64,
    /// Hypotheses introduced into produced goals.
    pub hyps_introduced: u64,
}

impl SplitStats {
    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add `other` into `self`.
    pub fn merge(&mut self, other: &SplitStats) {
        self.selections += other.selections;
        self.candidates_scanned += other.candidates_scanned;
        self.resolved_dropped += other.resolved_dropped;
        self.not_ready_requeued += other.not_ready_requeued;
        self.ready_deferred += other.ready_deferred;
        self.budget_exhausted += other.budget_exhausted;
        self.splits_performed += other.splits_performed;
        self.subgoals_produced += other.subgoals_produced;
        self.hyps_introduced += other.hyps_introduced;
    }

    /// Average number of goals per performed split.
    pub fn avg_branching(&self) -> f64 {
        if self.splits_performed == 0 {
            0.0
        } else {
            self.subgoals_produced as f64 / self.splits_performed as f64
        }
    }
}
