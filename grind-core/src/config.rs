//! Configuration for case splitting.

use serde::{Deserialize, Serialize};

/// Which candidate wins when two ready candidates have the same case count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Prefer the candidate with the strictly larger generation.
    #[default]
    NewerGeneration,
    /// Prefer the candidate with the strictly smaller generation.
    OlderGeneration,
}

impl TieBreak {
    /// Whether a challenger of generation `challenger` displaces an incumbent
    /// of generation `incumbent`. Equal generations never displace.
    #[must_use]
    pub fn prefers(self, challenger: u32, incumbent: u32) -> bool {
        match self {
            TieBreak::NewerGeneration => incumbent < challenger,
            TieBreak::OlderGeneration => challenger < incumbent,
        }
    }
}

/// Case-split configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrindConfig {
    /// Maximum number of case splits along one path from the root goal.
    pub splits: u32,
    /// Split on `if-then-else` conditions.
    pub split_ite: bool,
    /// Split on matcher applications.
    pub split_match: bool,
    /// Split on inductive predicates.
    pub split_ind_pred: bool,
    /// Tie-break between ready candidates with equal case counts.
    pub tie_break: TieBreak,
    /// Open goals the search loop accumulates before it stops expanding.
    pub max_goals: usize,
}

impl Default for GrindConfig {
    fn default() -> Self {
        Self {
            splits: 8,
            split_ite: true,
            split_match: true,
            split_ind_pred: true,
            tie_break: TieBreak::default(),
            max_goals: 1024,
        }
    }
}

impl GrindConfig {
    /// Set the split budget.
    #[must_use]
    pub fn with_splits(mut self, splits: u32) -> Self {
        self.splits = splits;
        self
    }

    /// Enable or disable `if-then-else` splitting.
    #[must_use]
    pub fn with_split_ite(mut self, enabled: bool) -> Self {
        self.split_ite = enabled;
        self
    }

    /// Enable or disable matcher splitting.
    #[must_use]
    pub fn with_split_match(mut self, enabled: bool) -> Self {
        self.split_match = enabled;
        self
    }

    /// Enable or disable inductive-predicate splitting.
    #[must_use]
    pub fn with_split_ind_pred(mut self, enabled: bool) -> Self {
        self.split_ind_pred = enabled;
        self
    }

    /// Set the tie-break direction.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the open-goal bound of the search loop.
    #[must_use]
    pub fn with_max_goals(mut self, max_goals: usize) -> Self {
        self.max_goals = max_goals;
        self
    }

    /// `checkMaxCaseSplit`: true once `num_splits` has reached the budget.
    #[must_use]
    pub fn budget_exceeded(&self, num_splits: u32) -> bool {
        num_splits >= self.splits
    }
}
