//! Split execution.
//!
//! Builds the major premise for a selected candidate, hands it to the host's
//! eliminator and introduces the branch hypotheses into every produced goal.
//! Execution is atomic for the parent goal: it is only marked as having
//! performed the split once every child has been produced.

use crate::classify::{ClassifiedShape, classify};
use crate::select::SelectedSplit;
use crate::stats::SplitStats;
use grind_core::traits::{CasesTactic, CasesTarget, CongruenceOracle, Environment, Intro};
use grind_core::{ExprId, ExprManager, Goal, GrindConfig, MVarId, Result};
use tracing::{debug, trace};

/// What to hand to the host eliminator.
enum Elim {
    Cases(CasesTarget),
    Match { app: ExprId, num_alts: u32 },
}

/// `p ∨ ¬p` by excluded middle.
fn excluded_middle(exprs: &mut ExprManager, p: ExprId) -> CasesTarget {
    let not_p = exprs.mk_not(p);
    CasesTarget::Or {
        major: exprs.mk_em(p),
        left: p,
        right: not_p,
    }
}

fn eliminator<H>(
    exprs: &mut ExprManager,
    host: &mut H,
    goal: &Goal,
    h: ExprId,
    shape: ClassifiedShape,
) -> Result<Elim>
where
    H: CongruenceOracle + ?Sized,
{
    let elim = match shape {
        ClassifiedShape::IteCond(c) | ClassifiedShape::DiteCond(c) => {
            Elim::Cases(excluded_middle(exprs, c))
        }
        ClassifiedShape::Iff(p, _) => Elim::Cases(excluded_middle(exprs, p)),
        ClassifiedShape::Disjunct(p, q) => Elim::Cases(CasesTarget::Or {
            major: exprs.cleanup(h),
            left: p,
            right: q,
        }),
        ClassifiedShape::Conjunct(p, q) => {
            let proof = host.mk_eq_false_proof(exprs, goal, h)?;
            let major = exprs.mk_or_of_and_eq_false(p, q, proof);
            let left = exprs.mk_not(p);
            let right = exprs.mk_not(q);
            Elim::Cases(CasesTarget::Or { major, left, right })
        }
        ClassifiedShape::InductiveCases {
            num_ctors,
            relevant,
        } => Elim::Cases(CasesTarget::Inductive {
            major: exprs.cleanup(h),
            num_ctors,
            relevant,
        }),
        ClassifiedShape::MatchApp { num_alts } => Elim::Match {
            app: exprs.cleanup(h),
            num_alts,
        },
        ClassifiedShape::NotASplit => {
            panic!(
                "selected split `{}` no longer classifies as a split",
                exprs.display(h)
            )
        }
    };
    Ok(elim)
}

/// Introduce every pending hypothesis of `goal` at `generation`.
fn intro_new_hyps<H>(
    exprs: &mut ExprManager,
    host: &mut H,
    stats: &mut SplitStats,
    goal: &mut Goal,
    generation: u32,
) -> Result<()>
where
    H: CasesTactic + ?Sized,
{
    loop {
        match host.intro(exprs, goal, generation)? {
            Intro::Done => return Ok(()),
            Intro::Hyp { prop, mvar_id } => {
                goal.mvar_id = mvar_id;
                goal.hyps.push(prop);
                stats.hyps_introduced += 1;
            }
        }
    }
}

pub(crate) fn execute_split<H>(
    exprs: &mut ExprManager,
    host: &mut H,
    config: &GrindConfig,
    stats: &mut SplitStats,
    goal: &mut Goal,
    sel: SelectedSplit,
) -> Result<Vec<Goal>>
where
    H: CongruenceOracle + Environment + CasesTactic + ?Sized,
{
    let h = sel.hyp;
    let shape = classify(exprs, &*host, config, h);
    let generation = host.generation(goal, h)?;
    let child_generation = if sel.num_cases > 1 {
        generation + 1
    } else {
        generation
    };
    trace!(
        target: "grind::debug::split",
        hyp = %exprs.display(h),
        generation,
        "next split"
    );

    let mvars: Vec<MVarId> = match eliminator(exprs, host, goal, h, shape)? {
        Elim::Cases(target) => host.cases(exprs, goal, &target)?,
        Elim::Match { app, num_alts } => host.cases_match(exprs, goal, app, num_alts)?,
    };

    let mut children = Vec::with_capacity(mvars.len());
    for mvar_id in mvars {
        let mut child = goal.child(mvar_id);
        child.split.mark_resolved(h);
        intro_new_hyps(exprs, host, stats, &mut child, child_generation)?;
        children.push(child);
    }

    goal.split.mark_resolved(h);
    stats.splits_performed += 1;
    stats.subgoals_produced += children.len() as u64;
    debug!(
        target: "grind::split",
        hyp = %exprs.display(h),
        generation,
        num_cases = sel.num_cases,
        goals = children.len(),
        "case split"
    );
    Ok(children)
}
