//! Declaration lookups.

use lasso::Spur;

/// What the environment knows about an inductive predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InductiveInfo {
    /// Number of constructors, at least one.
    pub num_ctors: u32,
    /// Whether eliminating it needs the dependent recursor.
    pub relevant: bool,
}

/// What the environment knows about a compiled pattern matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherInfo {
    /// Leading parameters.
    pub num_params: u32,
    /// Discriminants being matched on.
    pub num_discrs: u32,
    /// Match arms, at least one.
    pub num_alts: u32,
}

impl MatcherInfo {
    /// Arguments a full application carries: parameters, the motive,
    /// discriminants and alternatives.
    pub fn arity(&self) -> usize {
        (self.num_params + 1 + self.num_discrs + self.num_alts) as usize
    }
}

/// Environment queries used by the classifier.
pub trait Environment {
    /// Inductive-predicate info for a declaration name.
    fn inductive_predicate(&self, name: Spur) -> Option<InductiveInfo>;

    /// Matcher info for a declaration name.
    fn matcher_info(&self, name: Spur) -> Option<MatcherInfo>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_arity() {
        let info = MatcherInfo {
            num_params: 1,
            num_discrs: 2,
            num_alts: 3,
        };
        assert_eq!(info.arity(), 7);
    }
}
