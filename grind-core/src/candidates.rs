//! Per-goal split candidate store.
//!
//! Candidates are kept in the order they were internalized. Selection drains
//! the whole queue, inspects every entry once, and refills it with the
//! entries worth revisiting. Refilled entries go back to the front in their
//! given order, so `refill(drain())` is the identity.

use crate::expr::ExprId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// FIFO queue of pending split candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitCandidates {
    queue: VecDeque<ExprId>,
}

impl SplitCandidates {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly internalized candidate.
    pub fn push(&mut self, e: ExprId) {
        self.queue.push_back(e);
    }

    /// Take every pending candidate, oldest first, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<ExprId> {
        self.queue.drain(..).collect()
    }

    /// Put `kept` back in front of whatever is pending, preserving its order.
    pub fn refill(&mut self, kept: Vec<ExprId>) {
        for e in kept.into_iter().rev() {
            self.queue.push_front(e);
        }
    }

    /// Number of pending candidates.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether `e` is pending.
    pub fn contains(&self, e: ExprId) -> bool {
        self.queue.contains(&e)
    }

    /// Pending candidates, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = ExprId> + '_ {
        self.queue.iter().copied()
    }
}

impl FromIterator<ExprId> for SplitCandidates {
    fn from_iter<I: IntoIterator<Item = ExprId>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

/// Split bookkeeping embedded in every goal.
#[derive(Debug, Clone, Default)]
pub struct SplitState {
    /// Pending candidates.
    pub candidates: SplitCandidates,
    num_splits: u32,
    resolved: FxHashSet<ExprId>,
}

impl SplitState {
    /// Fresh state for a root goal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits performed on the path from the root goal to this one.
    pub fn num_splits(&self) -> u32 {
        self.num_splits
    }

    /// Record one more split on this path.
    pub fn inc_splits(&mut self) {
        self.num_splits += 1;
    }

    /// Remember that the split on `e` has been performed.
    pub fn mark_resolved(&mut self, e: ExprId) {
        self.resolved.insert(e);
    }

    /// Whether the split on `e` has been performed.
    pub fn is_resolved(&self, e: ExprId) -> bool {
        self.resolved.contains(&e)
    }
}
