//! Interfaces the host proof engine provides to case splitting.
//!
//! The split engine never owns a congruence closure, an environment, or an
//! eliminator. It talks to them through these traits.

pub mod cases;
pub mod congruence;
pub mod environment;

pub use cases::{CasesTactic, CasesTarget, Intro};
pub use congruence::CongruenceOracle;
pub use environment::{Environment, InductiveInfo, MatcherInfo};
