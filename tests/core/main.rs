//! Integration tests for the comparator contract, the parity policy, and
//! partitioning as seen through the public `isomorph` API.

#[path = "../common/mod.rs"]
mod common;

mod comparator_invariants;
mod concurrency;
mod parity_scenarios;
