//! grind split - case-split selection and execution
//!
//! Given a goal whose congruence closure has saturated, this crate decides
//! which pending split candidate to branch on next and performs the split:
//! - [`classify`] reads the structural shape of a candidate
//! - [`status`] asks the congruence closure whether splitting is still useful
//! - [`SplitEngine::select_next_split`] scans the candidate queue once,
//!   dropping resolved candidates and keeping the narrowest ready one
//! - [`SplitEngine::execute_split`] builds the major premise, calls the
//!   host eliminator and introduces the branch hypotheses
//! - [`SplitEngine::split_next`] ties the two together; [`SplitEngine::search`]
//!   repeats it depth-first over the produced goals
//!
//! # Example
//!
//! ```
//! use grind_core::{ExprManager, ScriptedHost};
//! use grind_split::SplitEngine;
//!
//! let mut exprs = ExprManager::new();
//! let mut host = ScriptedHost::new();
//! let p = exprs.mk_fvar("p");
//! let q = exprs.mk_fvar("q");
//! let or_pq = exprs.mk_or(p, q);
//!
//! let mut goal = host.new_goal(&mut exprs, [or_pq]);
//!
//! let mut engine = SplitEngine::new();
//! let children = engine
//!     .split_next(&mut exprs, &mut host, &mut goal)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(children.len(), 2);
//! assert_eq!(children[0].hyps, vec![p]);
//! assert_eq!(children[1].num_splits(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod engine;
mod execute;
pub mod select;
pub mod stats;
pub mod status;

pub use classify::{ClassifiedShape, classify};
pub use engine::{SearchOutcome, SplitEngine, SplitHost};
pub use select::SelectedSplit;
pub use stats::SplitStats;
pub use status::{SplitStatus, status};
