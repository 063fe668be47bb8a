//! grind core - expressions, goals and host interfaces for case splitting
//!
//! This crate provides the shared vocabulary of the grind case-split engine:
//! - A hash-consed expression arena with interned names ([`ExprManager`])
//! - The goal record and its split candidate store ([`Goal`], [`SplitCandidates`])
//! - Configuration ([`GrindConfig`]) and the error type ([`GrindError`])
//! - The traits a host proof engine implements ([`CongruenceOracle`],
//!   [`Environment`], [`CasesTactic`])
//! - A table-driven host for replaying searches ([`ScriptedHost`])
//!
//! # Example
//!
//! ```
//! use grind_core::{ExprManager, ScriptedHost};
//! use grind_core::traits::CongruenceOracle;
//!
//! let mut exprs = ExprManager::new();
//! let mut host = ScriptedHost::new();
//!
//! let p = exprs.mk_fvar("p");
//! let q = exprs.mk_fvar("q");
//! let or_pq = exprs.mk_or(p, q);
//!
//! let goal = host.new_goal(&mut exprs, [or_pq]);
//! host.assert_true(goal.mvar_id, p).unwrap();
//!
//! assert!(host.is_eq_true(&goal, p).unwrap());
//! assert_eq!(goal.split.candidates.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod candidates;
pub mod config;
pub mod error;
pub mod expr;
pub mod goal;
pub mod scripted;
pub mod traits;

pub use candidates::{SplitCandidates, SplitState};
pub use config::{GrindConfig, TieBreak};
pub use error::{GrindError, Result};
pub use expr::{Builtins, ExprId, ExprKind, ExprManager, MVarId};
pub use goal::Goal;
pub use scripted::ScriptedHost;
pub use traits::{
    CasesTactic, CasesTarget, CongruenceOracle, Environment, InductiveInfo, Intro, MatcherInfo,
};
