//! Congruence-closure queries.

use crate::error::Result;
use crate::expr::{ExprId, ExprManager};
use crate::goal::Goal;

/// Read access to the congruence closure of a goal, plus proof extraction.
///
/// Every query is answered relative to `goal`; a host typically keys its
/// e-graph on `goal.mvar_id`.
pub trait CongruenceOracle {
    /// Whether the goal's facts are already contradictory.
    fn is_inconsistent(&self, goal: &Goal) -> Result<bool>;

    /// Whether `e` is known to be equal to `True`.
    fn is_eq_true(&self, goal: &Goal, e: ExprId) -> Result<bool>;

    /// Whether `e` is known to be equal to `False`.
    fn is_eq_false(&self, goal: &Goal, e: ExprId) -> Result<bool>;

    /// Whether `a` and `b` are in the same equivalence class.
    fn is_eqv(&self, goal: &Goal, a: ExprId, b: ExprId) -> Result<bool>;

    /// Round of the saturation loop in which `e` was internalized.
    fn generation(&self, goal: &Goal, e: ExprId) -> Result<u32>;

    /// Proof of `e = True`. Fails when `e` is not known to be true.
    fn mk_eq_true_proof(&mut self, exprs: &mut ExprManager, goal: &Goal, e: ExprId)
    -> Result<ExprId>;

    /// Proof of `e = False`. Fails when `e` is not known to be false.
    fn mk_eq_false_proof(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        e: ExprId,
    ) -> Result<ExprId>;
}
