//! Eliminator sub-tactics.

use crate::error::Result;
use crate::expr::{ExprId, ExprManager, MVarId};
use crate::goal::Goal;

/// Major premise handed to `cases`, together with what each branch assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasesTarget {
    /// `major : left ∨ right`. Two branches, assuming `left` and `right`.
    Or {
        /// Proof of the disjunction.
        major: ExprId,
        /// Assumption of the first branch.
        left: ExprId,
        /// Assumption of the second branch.
        right: ExprId,
    },
    /// An inductive-predicate hypothesis, one branch per constructor.
    Inductive {
        /// The hypothesis being eliminated.
        major: ExprId,
        /// Number of constructors.
        num_ctors: u32,
        /// Whether the dependent recursor is needed.
        relevant: bool,
    },
}

impl CasesTarget {
    /// The major premise.
    pub fn major(&self) -> ExprId {
        match *self {
            CasesTarget::Or { major, .. } | CasesTarget::Inductive { major, .. } => major,
        }
    }

    /// Number of branches the eliminator produces.
    pub fn num_cases(&self) -> u32 {
        match *self {
            CasesTarget::Or { .. } => 2,
            CasesTarget::Inductive { num_ctors, .. } => num_ctors,
        }
    }
}

/// Outcome of one `intro` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intro {
    /// Nothing left to introduce.
    Done,
    /// Introduced a hypothesis; the goal continues as `mvar_id`.
    Hyp {
        /// Proposition of the new hypothesis.
        prop: ExprId,
        /// Goal after the introduction.
        mvar_id: MVarId,
    },
}

/// Goal-splitting sub-tactics. Each call either succeeds completely or fails
/// without producing goals.
pub trait CasesTactic {
    /// Eliminate `target`, one new goal per branch, in branch order.
    fn cases(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        target: &CasesTarget,
    ) -> Result<Vec<MVarId>>;

    /// Split a matcher application `app` into its `num_alts` arms.
    fn cases_match(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        app: ExprId,
        num_alts: u32,
    ) -> Result<Vec<MVarId>>;

    /// Introduce the next pending hypothesis of `goal` at `generation`.
    fn intro(&mut self, exprs: &mut ExprManager, goal: &Goal, generation: u32) -> Result<Intro>;
}
