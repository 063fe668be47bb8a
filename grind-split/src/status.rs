//! Split status of a classified candidate.
//!
//! The status is recomputed from the congruence closure on every selection
//! round and never cached.

use crate::classify::ClassifiedShape;
use grind_core::traits::CongruenceOracle;
use grind_core::{ExprId, Goal, Result};

/// Whether a candidate can, should, or cannot be split on now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStatus {
    /// Already decided; drop the candidate for good.
    Resolved,
    /// Not decidable yet; revisit next round.
    NotReady,
    /// Can be split into this many cases.
    Ready(u32),
}

fn is_decided<O>(oracle: &O, goal: &Goal, e: ExprId) -> Result<bool>
where
    O: CongruenceOracle + ?Sized,
{
    Ok(oracle.is_eq_true(goal, e)? || oracle.is_eq_false(goal, e)?)
}

/// Status of candidate `h` whose shape is `shape`.
pub fn status<O>(oracle: &O, goal: &Goal, h: ExprId, shape: &ClassifiedShape) -> Result<SplitStatus>
where
    O: CongruenceOracle + ?Sized,
{
    let status = match *shape {
        ClassifiedShape::IteCond(c) | ClassifiedShape::DiteCond(c) => {
            if is_decided(oracle, goal, c)? {
                SplitStatus::Resolved
            } else {
                SplitStatus::Ready(2)
            }
        }
        ClassifiedShape::Disjunct(p, q) => {
            // One side true: nothing to branch on. One side false: the other
            // is forced by propagation.
            if oracle.is_eq_true(goal, p)?
                || oracle.is_eq_true(goal, q)?
                || oracle.is_eq_false(goal, p)?
                || oracle.is_eq_false(goal, q)?
            {
                SplitStatus::Resolved
            } else {
                SplitStatus::Ready(2)
            }
        }
        ClassifiedShape::Conjunct(p, q) => {
            if oracle.is_eq_false(goal, p)?
                || oracle.is_eq_false(goal, q)?
                || (oracle.is_eq_true(goal, p)? && oracle.is_eq_true(goal, q)?)
            {
                SplitStatus::Resolved
            } else {
                SplitStatus::NotReady
            }
        }
        ClassifiedShape::Iff(p, q) => {
            if is_decided(oracle, goal, p)? || is_decided(oracle, goal, q)? {
                SplitStatus::Resolved
            } else {
                SplitStatus::Ready(2)
            }
        }
        ClassifiedShape::MatchApp { num_alts } => {
            if goal.split.is_resolved(h) {
                SplitStatus::Resolved
            } else {
                SplitStatus::Ready(num_alts)
            }
        }
        ClassifiedShape::InductiveCases { num_ctors, .. } => {
            if oracle.is_eq_true(goal, h)? {
                SplitStatus::Resolved
            } else {
                SplitStatus::Ready(num_ctors)
            }
        }
        ClassifiedShape::NotASplit => SplitStatus::NotReady,
    };
    Ok(status)
}
