//! Split candidate classification.
//!
//! Decides, from the structure of a proposition alone, which kind of case
//! split it offers. Classification is total: anything unexpected (a foreign
//! head, a wrong argument count) is [`ClassifiedShape::NotASplit`].
//!
//! Checks run in a fixed order:
//!
//! 1. matcher applications,
//! 2. inductive predicates,
//! 3. the builtin connectives `And`, `Or`, `Iff`, `ite`, `dite`, and
//!    `Eq _ (ite ..) _` / `Eq _ (dite ..) _`, which split on the condition.

use grind_core::traits::Environment;
use grind_core::{ExprId, ExprManager, GrindConfig};

const BINARY_ARITY: usize = 2;
const EQ_ARITY: usize = 3;
const ITE_ARITY: usize = 5;
const ITE_COND: usize = 1;
const EQ_LHS: usize = 1;

/// Structural shape of a split candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedShape {
    /// Condition of an `ite` term.
    IteCond(ExprId),
    /// Condition of a `dite` term.
    DiteCond(ExprId),
    /// `a ∧ b`
    Conjunct(ExprId, ExprId),
    /// `a ∨ b`
    Disjunct(ExprId, ExprId),
    /// `a ↔ b`
    Iff(ExprId, ExprId),
    /// Matcher application with this many arms.
    MatchApp {
        /// Number of alternatives.
        num_alts: u32,
    },
    /// Inductive-predicate application.
    InductiveCases {
        /// Number of constructors.
        num_ctors: u32,
        /// Whether the dependent recursor is needed.
        relevant: bool,
    },
    /// Offers no case split.
    NotASplit,
}

impl ClassifiedShape {
    /// Whether the shape offers a split at all.
    pub fn is_split(&self) -> bool {
        !matches!(self, ClassifiedShape::NotASplit)
    }
}

/// Classify the split candidate `h`.
pub fn classify<E>(exprs: &ExprManager, env: &E, config: &GrindConfig, h: ExprId) -> ClassifiedShape
where
    E: Environment + ?Sized,
{
    let e = exprs.cleanup(h);
    let Some(head) = exprs.head_const(e) else {
        return ClassifiedShape::NotASplit;
    };
    let args = exprs.app_args(e);

    if let Some(info) = env.matcher_info(head)
        && args.len() >= info.arity()
    {
        if !config.split_match || info.num_alts == 0 {
            return ClassifiedShape::NotASplit;
        }
        return ClassifiedShape::MatchApp {
            num_alts: info.num_alts,
        };
    }

    if let Some(info) = env.inductive_predicate(head) {
        if !config.split_ind_pred || info.num_ctors == 0 {
            return ClassifiedShape::NotASplit;
        }
        return ClassifiedShape::InductiveCases {
            num_ctors: info.num_ctors,
            relevant: info.relevant,
        };
    }

    let b = &exprs.builtins;
    let arg = |i: usize| exprs.cleanup(args[i]);
    match args.len() {
        BINARY_ARITY if head == b.and => ClassifiedShape::Conjunct(arg(0), arg(1)),
        BINARY_ARITY if head == b.or => ClassifiedShape::Disjunct(arg(0), arg(1)),
        BINARY_ARITY if head == b.iff => ClassifiedShape::Iff(arg(0), arg(1)),
        ITE_ARITY if head == b.ite || head == b.dite => ite_condition(exprs, config, e),
        EQ_ARITY if head == b.eq => ite_condition(exprs, config, arg(EQ_LHS)),
        _ => ClassifiedShape::NotASplit,
    }
}

/// `IteCond`/`DiteCond` for an `ite`/`dite` application, else `NotASplit`.
fn ite_condition(exprs: &ExprManager, config: &GrindConfig, e: ExprId) -> ClassifiedShape {
    if !config.split_ite {
        return ClassifiedShape::NotASplit;
    }
    let b = &exprs.builtins;
    if let Some(args) = exprs.app_of(e, b.ite, ITE_ARITY) {
        ClassifiedShape::IteCond(exprs.cleanup(args[ITE_COND]))
    } else if let Some(args) = exprs.app_of(e, b.dite, ITE_ARITY) {
        ClassifiedShape::DiteCond(exprs.cleanup(args[ITE_COND]))
    } else {
        ClassifiedShape::NotASplit
    }
}
