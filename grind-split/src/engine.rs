//! Split driver and bounded search loop.

use crate::execute::execute_split;
use crate::select::{self, SelectedSplit};
use crate::stats::SplitStats;
use grind_core::traits::{CasesTactic, CongruenceOracle, Environment};
use grind_core::{ExprManager, Goal, GrindConfig, Result};
use tracing::{debug, trace};

/// Everything a host must provide to drive case splitting.
pub trait SplitHost: CongruenceOracle + Environment + CasesTactic {}

impl<T: CongruenceOracle + Environment + CasesTactic + ?Sized> SplitHost for T {}

/// Result of [`SplitEngine::search`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Goals left open, in depth-first order.
    pub open: Vec<Goal>,
    /// Goals closed by contradiction or by an eliminator with no branches.
    pub closed: usize,
    /// Splits performed.
    pub splits: u64,
}

impl SearchOutcome {
    /// Whether every goal was closed.
    pub fn is_closed(&self) -> bool {
        self.open.is_empty()
    }
}

/// Case-split engine.
///
/// Holds configuration and statistics; goals and the host are passed in on
/// every call.
#[derive(Debug, Default)]
pub struct SplitEngine {
    config: GrindConfig,
    stats: SplitStats,
}

impl SplitEngine {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given configuration.
    pub fn with_config(config: GrindConfig) -> Self {
        Self {
            config,
            stats: SplitStats::default(),
        }
    }

    /// Configuration.
    pub fn config(&self) -> &GrindConfig {
        &self.config
    }

    /// Statistics.
    pub fn stats(&self) -> &SplitStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Pick the next candidate to split on, or `None` when the goal is
    /// inconsistent, no candidate is ready, or the split budget is spent.
    ///
    /// Resolved candidates are removed from the queue; every other candidate
    /// is kept in order.
    pub fn select_next_split<H>(
        &mut self,
        exprs: &ExprManager,
        host: &H,
        goal: &mut Goal,
    ) -> Result<Option<SelectedSplit>>
    where
        H: CongruenceOracle + Environment + ?Sized,
    {
        select::select_next_split(exprs, host, &self.config, &mut self.stats, goal)
    }

    /// Split `goal` on `sel`, returning one goal per branch.
    pub fn execute_split<H>(
        &mut self,
        exprs: &mut ExprManager,
        host: &mut H,
        goal: &mut Goal,
        sel: SelectedSplit,
    ) -> Result<Vec<Goal>>
    where
        H: SplitHost + ?Sized,
    {
        execute_split(exprs, host, &self.config, &mut self.stats, goal, sel)
    }

    /// Select and perform the next case split.
    ///
    /// `None` means no split is possible; `Some` carries the produced goals.
    pub fn split_next<H>(
        &mut self,
        exprs: &mut ExprManager,
        host: &mut H,
        goal: &mut Goal,
    ) -> Result<Option<Vec<Goal>>>
    where
        H: SplitHost + ?Sized,
    {
        let Some(sel) = self.select_next_split(exprs, &*host, goal)? else {
            trace!(target: "grind::debug::split", goal = ?goal.mvar_id, "no next split");
            return Ok(None);
        };
        self.execute_split(exprs, host, goal, sel).map(Some)
    }

    /// Split depth-first until every goal is closed or stuck.
    ///
    /// Inconsistent goals are closed without splitting. Once
    /// `config.max_goals` goals are open or waiting, the remaining goals are
    /// returned open without further splitting.
    pub fn search<H>(
        &mut self,
        exprs: &mut ExprManager,
        host: &mut H,
        root: Goal,
    ) -> Result<SearchOutcome>
    where
        H: SplitHost + ?Sized,
    {
        let mut outcome = SearchOutcome {
            open: Vec::new(),
            closed: 0,
            splits: 0,
        };
        let mut stack = vec![root];

        while let Some(mut goal) = stack.pop() {
            if host.is_inconsistent(&goal)? {
                outcome.closed += 1;
                continue;
            }
            if outcome.open.len() + stack.len() >= self.config.max_goals {
                outcome.open.push(goal);
                continue;
            }
            match self.split_next(exprs, host, &mut goal)? {
                None => outcome.open.push(goal),
                Some(children) if children.is_empty() => {
                    outcome.splits += 1;
                    outcome.closed += 1;
                }
                Some(children) => {
                    outcome.splits += 1;
                    stack.extend(children.into_iter().rev());
                }
            }
        }

        debug!(
            target: "grind::split",
            open = outcome.open.len(),
            closed = outcome.closed,
            splits = outcome.splits,
            "search finished"
        );
        Ok(outcome)
    }
}
