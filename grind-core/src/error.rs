//! Error types for the grind case-split engine.
//!
//! Every failure here comes from a host collaborator: the congruence closure,
//! the environment, or the `cases`/`intro` sub-tactics. The engine never
//! recovers from them; they travel to the caller of `split_next` unchanged.

use crate::expr::{ExprId, MVarId};
use thiserror::Error;

/// Error raised by an oracle, a sub-tactic, or the expression arena.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrindError {
    /// The congruence closure (or another oracle) failed to answer a query.
    #[error("oracle failure: {0}")]
    Oracle(String),
    /// The `cases`/`casesMatch` sub-tactic failed.
    #[error("cases failed on {major:?}: {reason}")]
    Cases {
        /// Major premise handed to the eliminator.
        major: ExprId,
        /// Host-provided explanation.
        reason: String,
    },
    /// Introducing a branch hypothesis failed.
    #[error("intro failed in goal {goal:?}: {reason}")]
    Intro {
        /// Goal being introduced into.
        goal: MVarId,
        /// Host-provided explanation.
        reason: String,
    },
    /// An expression handle does not belong to the arena.
    #[error("unknown expression {0:?}")]
    UnknownExpr(ExprId),
    /// A goal metavariable is not known to the host.
    #[error("unknown goal {0:?}")]
    UnknownGoal(MVarId),
    /// A metavariable was assigned twice, or assigned to itself.
    #[error("metavariable {0:?} is already assigned")]
    MVarAssigned(MVarId),
}

impl GrindError {
    /// Build an oracle failure from anything printable.
    pub fn oracle(message: impl Into<String>) -> Self {
        GrindError::Oracle(message.into())
    }

    /// Build a `cases` failure for the given major premise.
    pub fn cases(major: ExprId, reason: impl Into<String>) -> Self {
        GrindError::Cases {
            major,
            reason: reason.into(),
        }
    }
}

/// Result type used throughout the workspace.
pub type Result<T> = std::result::Result<T, GrindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrindError::oracle("instantiation failed");
        assert_eq!(err.to_string(), "oracle failure: instantiation failed");

        let err = GrindError::cases(ExprId(7), "universe mismatch");
        assert_eq!(err.to_string(), "cases failed on ExprId(7): universe mismatch");
    }
}
