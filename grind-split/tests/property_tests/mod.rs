//! Property-based tests for grind-split
//!
//! Random candidate queues with random congruence facts, checked against a
//! direct model of the selection rule.

mod candidate_properties;
mod selector_properties;
