//! Table-driven host.
//!
//! [`ScriptedHost`] answers every oracle query from explicit tables instead of
//! a real congruence closure. It is enough to replay a recorded search or to
//! drive the split engine in tests:
//!
//! - facts are per goal and copied into every child goal,
//! - `cases` on `left ∨ right` queues `left` (resp. `right`) for introduction
//!   in the matching child, and introducing a proposition makes it `True`
//!   (introducing `¬p` also makes `p` `False`),
//! - asserting a proposition both `True` and `False` makes the goal
//!   inconsistent.

use crate::error::{GrindError, Result};
use crate::expr::{ExprId, ExprManager, MVarId};
use crate::goal::Goal;
use crate::traits::{
    CasesTactic, CasesTarget, CongruenceOracle, Environment, InductiveInfo, Intro, MatcherInfo,
};
use lasso::Spur;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::Cell;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
struct Facts {
    eq_true: FxHashSet<ExprId>,
    eq_false: FxHashSet<ExprId>,
    eqv: FxHashSet<(ExprId, ExprId)>,
    inconsistent: bool,
    pending_intros: VecDeque<ExprId>,
}

impl Facts {
    fn assert_true(&mut self, e: ExprId) {
        if self.eq_false.contains(&e) {
            self.inconsistent = true;
        }
        self.eq_true.insert(e);
    }

    fn assert_false(&mut self, e: ExprId) {
        if self.eq_true.contains(&e) {
            self.inconsistent = true;
        }
        self.eq_false.insert(e);
    }
}

/// Host whose oracles are lookups in tables filled by the caller.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    goals: FxHashMap<MVarId, Facts>,
    generations: FxHashMap<ExprId, u32>,
    inductives: FxHashMap<Spur, InductiveInfo>,
    matchers: FxHashMap<Spur, MatcherInfo>,
    query_failure: Option<String>,
    cases_failure: Option<String>,
    queries: Cell<u64>,
}

impl ScriptedHost {
    /// Empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh root goal with the given split candidates.
    pub fn new_goal(
        &mut self,
        exprs: &mut ExprManager,
        candidates: impl IntoIterator<Item = ExprId>,
    ) -> Goal {
        let mvar_id = exprs.fresh_mvar_id();
        self.goals.insert(mvar_id, Facts::default());
        Goal::with_candidates(mvar_id, candidates)
    }

    fn facts(&self, goal: MVarId) -> Result<&Facts> {
        self.goals.get(&goal).ok_or(GrindError::UnknownGoal(goal))
    }

    fn facts_mut(&mut self, goal: MVarId) -> Result<&mut Facts> {
        self.goals.get_mut(&goal).ok_or(GrindError::UnknownGoal(goal))
    }

    fn query(&self) -> Result<()> {
        self.queries.set(self.queries.get() + 1);
        match &self.query_failure {
            Some(reason) => Err(GrindError::oracle(reason.clone())),
            None => Ok(()),
        }
    }

    /// Record `e = True` in `goal`.
    pub fn assert_true(&mut self, goal: MVarId, e: ExprId) -> Result<()> {
        self.facts_mut(goal)?.assert_true(e);
        Ok(())
    }

    /// Record `e = False` in `goal`.
    pub fn assert_false(&mut self, goal: MVarId, e: ExprId) -> Result<()> {
        self.facts_mut(goal)?.assert_false(e);
        Ok(())
    }

    /// Record `a = b` in `goal`.
    pub fn assert_eqv(&mut self, goal: MVarId, a: ExprId, b: ExprId) -> Result<()> {
        self.facts_mut(goal)?.eqv.insert((a.min(b), a.max(b)));
        Ok(())
    }

    /// Make `goal` inconsistent.
    pub fn mark_inconsistent(&mut self, goal: MVarId) -> Result<()> {
        self.facts_mut(goal)?.inconsistent = true;
        Ok(())
    }

    /// Set the generation reported for `e`. Unset generations are zero.
    pub fn set_generation(&mut self, e: ExprId, generation: u32) {
        self.generations.insert(e, generation);
    }

    /// Declare `name` an inductive predicate.
    pub fn add_inductive(&mut self, name: Spur, info: InductiveInfo) {
        self.inductives.insert(name, info);
    }

    /// Declare `name` a matcher.
    pub fn add_matcher(&mut self, name: Spur, info: MatcherInfo) {
        self.matchers.insert(name, info);
    }

    /// Make every congruence query fail with `reason`.
    pub fn fail_queries(&mut self, reason: impl Into<String>) {
        self.query_failure = Some(reason.into());
    }

    /// Make `cases` and `cases_match` fail with `reason`.
    pub fn fail_cases(&mut self, reason: impl Into<String>) {
        self.cases_failure = Some(reason.into());
    }

    /// Congruence queries answered so far.
    pub fn queries(&self) -> u64 {
        self.queries.get()
    }

    fn branch(&mut self, exprs: &mut ExprManager, parent: &Facts, intro: Option<ExprId>) -> MVarId {
        let mvar_id = exprs.fresh_mvar_id();
        let mut facts = parent.clone();
        facts.pending_intros.clear();
        facts.pending_intros.extend(intro);
        self.goals.insert(mvar_id, facts);
        mvar_id
    }
}

impl CongruenceOracle for ScriptedHost {
    fn is_inconsistent(&self, goal: &Goal) -> Result<bool> {
        self.query()?;
        Ok(self.facts(goal.mvar_id)?.inconsistent)
    }

    fn is_eq_true(&self, goal: &Goal, e: ExprId) -> Result<bool> {
        self.query()?;
        Ok(self.facts(goal.mvar_id)?.eq_true.contains(&e))
    }

    fn is_eq_false(&self, goal: &Goal, e: ExprId) -> Result<bool> {
        self.query()?;
        Ok(self.facts(goal.mvar_id)?.eq_false.contains(&e))
    }

    fn is_eqv(&self, goal: &Goal, a: ExprId, b: ExprId) -> Result<bool> {
        self.query()?;
        let facts = self.facts(goal.mvar_id)?;
        Ok(a == b
            || facts.eqv.contains(&(a.min(b), a.max(b)))
            || (facts.eq_true.contains(&a) && facts.eq_true.contains(&b))
            || (facts.eq_false.contains(&a) && facts.eq_false.contains(&b)))
    }

    fn generation(&self, _goal: &Goal, e: ExprId) -> Result<u32> {
        self.query()?;
        Ok(self.generations.get(&e).copied().unwrap_or(0))
    }

    fn mk_eq_true_proof(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        e: ExprId,
    ) -> Result<ExprId> {
        if !self.is_eq_true(goal, e)? {
            return Err(GrindError::oracle(format!(
                "{} is not known to be True",
                exprs.display(e)
            )));
        }
        let witness = exprs.mk_const("ScriptedHost.eq_true");
        Ok(exprs.mk_app(witness, &[e]))
    }

    fn mk_eq_false_proof(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        e: ExprId,
    ) -> Result<ExprId> {
        if !self.is_eq_false(goal, e)? {
            return Err(GrindError::oracle(format!(
                "{} is not known to be False",
                exprs.display(e)
            )));
        }
        let witness = exprs.mk_const("ScriptedHost.eq_false");
        Ok(exprs.mk_app(witness, &[e]))
    }
}

impl Environment for ScriptedHost {
    fn inductive_predicate(&self, name: Spur) -> Option<InductiveInfo> {
        self.inductives.get(&name).copied()
    }

    fn matcher_info(&self, name: Spur) -> Option<MatcherInfo> {
        self.matchers.get(&name).copied()
    }
}

impl CasesTactic for ScriptedHost {
    fn cases(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        target: &CasesTarget,
    ) -> Result<Vec<MVarId>> {
        if let Some(reason) = &self.cases_failure {
            return Err(GrindError::cases(target.major(), reason.clone()));
        }
        let parent = self.facts(goal.mvar_id)?.clone();
        let children = match *target {
            CasesTarget::Or { left, right, .. } => vec![
                self.branch(exprs, &parent, Some(left)),
                self.branch(exprs, &parent, Some(right)),
            ],
            CasesTarget::Inductive { num_ctors, .. } => (0..num_ctors)
                .map(|_| self.branch(exprs, &parent, None))
                .collect(),
        };
        Ok(children)
    }

    fn cases_match(
        &mut self,
        exprs: &mut ExprManager,
        goal: &Goal,
        app: ExprId,
        num_alts: u32,
    ) -> Result<Vec<MVarId>> {
        if let Some(reason) = &self.cases_failure {
            return Err(GrindError::cases(app, reason.clone()));
        }
        let parent = self.facts(goal.mvar_id)?.clone();
        Ok((0..num_alts)
            .map(|_| self.branch(exprs, &parent, None))
            .collect())
    }

    fn intro(&mut self, exprs: &mut ExprManager, goal: &Goal, generation: u32) -> Result<Intro> {
        let mut facts = self.facts(goal.mvar_id)?.clone();
        let Some(prop) = facts.pending_intros.pop_front() else {
            return Ok(Intro::Done);
        };
        facts.assert_true(prop);
        if let Some([p]) = exprs.app_of(prop, exprs.builtins.not, 1) {
            facts.assert_false(*p);
        }
        self.generations.insert(prop, generation);

        let mvar_id = exprs.fresh_mvar_id();
        self.goals.insert(mvar_id, facts);
        Ok(Intro::Hyp { prop, mvar_id })
    }
}
