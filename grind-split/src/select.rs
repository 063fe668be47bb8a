//! Next-split selection.
//!
//! One linear pass over the drained candidate queue:
//!
//! - resolved and non-split candidates are dropped for good,
//! - not-ready candidates are requeued,
//! - among ready candidates the one with the fewest cases wins; equal case
//!   counts are broken by generation (see [`grind_core::TieBreak`]); every
//!   losing ready candidate is requeued.
//!
//! Requeued candidates keep the order in which they were set aside.

use crate::classify::{ClassifiedShape, classify};
use crate::stats::SplitStats;
use crate::status::{SplitStatus, status};
use grind_core::traits::{CongruenceOracle, Environment};
use grind_core::{ExprId, ExprManager, Goal, GrindConfig, Result};
use tracing::trace;

/// Candidate chosen for the next case split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedSplit {
    /// The candidate.
    pub hyp: ExprId,
    /// Number of cases it splits into.
    pub num_cases: u32,
}

#[derive(Debug, Clone, Copy)]
struct Best {
    split: SelectedSplit,
    /// Position in the requeue list it would take if set aside.
    slot: usize,
}

pub(crate) fn select_next_split<H>(
    exprs: &ExprManager,
    host: &H,
    config: &GrindConfig,
    stats: &mut SplitStats,
    goal: &mut Goal,
) -> Result<Option<SelectedSplit>>
where
    H: CongruenceOracle + Environment + ?Sized,
{
    if goal.split.candidates.is_empty() || host.is_inconsistent(goal)? {
        return Ok(None);
    }
    stats.selections += 1;

    let candidates = goal.split.candidates.drain();
    match scan(exprs, host, config, stats, goal, &candidates) {
        Ok((best, kept)) => Ok(finish(config, stats, goal, best, kept)),
        Err(err) => {
            goal.split.candidates.refill(candidates);
            Err(err)
        }
    }
}

fn scan<H>(
    exprs: &ExprManager,
    host: &H,
    config: &GrindConfig,
    stats: &mut SplitStats,
    goal: &Goal,
    candidates: &[ExprId],
) -> Result<(Option<Best>, Vec<ExprId>)>
where
    H: CongruenceOracle + Environment + ?Sized,
{
    let mut best: Option<Best> = None;
    let mut kept = Vec::with_capacity(candidates.len());

    for &h in candidates {
        stats.candidates_scanned += 1;
        let shape = classify(exprs, host, config, h);
        let st = status(host, goal, h, &shape)?;
        trace!(
            target: "grind::debug::split",
            hyp = %exprs.display(h),
            ?shape,
            status = ?st,
            "split candidate"
        );

        let num_cases = match st {
            _ if shape == ClassifiedShape::NotASplit => {
                stats.resolved_dropped += 1;
                continue;
            }
            SplitStatus::Resolved => {
                stats.resolved_dropped += 1;
                continue;
            }
            SplitStatus::NotReady => {
                stats.not_ready_requeued += 1;
                kept.push(h);
                continue;
            }
            SplitStatus::Ready(num_cases) => num_cases,
        };

        let challenger = SelectedSplit { hyp: h, num_cases };
        match best {
            None => {
                best = Some(Best {
                    split: challenger,
                    slot: kept.len(),
                });
            }
            Some(incumbent) => {
                stats.ready_deferred += 1;
                if displaces(host, config, goal, challenger, incumbent.split)? {
                    kept.push(incumbent.split.hyp);
                    best = Some(Best {
                        split: challenger,
                        slot: kept.len(),
                    });
                } else {
                    kept.push(h);
                }
            }
        }
    }
    Ok((best, kept))
}

/// Fewer cases win outright; equal case counts go to the tie-break.
fn displaces<H>(
    host: &H,
    config: &GrindConfig,
    goal: &Goal,
    challenger: SelectedSplit,
    incumbent: SelectedSplit,
) -> Result<bool>
where
    H: CongruenceOracle + ?Sized,
{
    if challenger.num_cases != incumbent.num_cases {
        return Ok(challenger.num_cases < incumbent.num_cases);
    }
    let incumbent_gen = host.generation(goal, incumbent.hyp)?;
    let challenger_gen = host.generation(goal, challenger.hyp)?;
    Ok(config.tie_break.prefers(challenger_gen, incumbent_gen))
}

fn finish(
    config: &GrindConfig,
    stats: &mut SplitStats,
    goal: &mut Goal,
    best: Option<Best>,
    mut kept: Vec<ExprId>,
) -> Option<SelectedSplit> {
    let Some(best) = best else {
        goal.split.candidates.refill(kept);
        return None;
    };
    if config.budget_exceeded(goal.num_splits()) {
        stats.budget_exhausted += 1;
        trace!(
            target: "grind::debug::split",
            num_splits = goal.num_splits(),
            max = config.splits,
            "split budget exhausted"
        );
        kept.insert(best.slot, best.split.hyp);
        goal.split.candidates.refill(kept);
        return None;
    }
    goal.split.candidates.refill(kept);
    Some(best.split)
}
