//! isomorph - equivalence classification for graph-isomorphism pruning
//!
//! An isomorphism search only needs to consider mapping a vertex onto
//! vertices of the same equivalence class. This crate provides the
//! comparator contract that defines those classes, a set of policies, and
//! the partitioning step that groups a graph's elements before search.
//!
//! # Quick Start
//!
//! ```
//! use isomorph::{partition, partitions_compatible, ParityClassifier};
//!
//! let left = partition(vec![1i64, 2, 3, 4, 5, 6], &ParityClassifier, &())?;
//! let right = partition(vec![7i64, 8, 9, 10, 11, 12], &ParityClassifier, &())?;
//! assert!(partitions_compatible(&left, &right, &ParityClassifier, &(), &())?);
//! # Ok::<(), isomorph::Error>(())
//! ```
//!
//! # Architecture
//!
//! All types live in `isomorph-core`; this crate re-exports them. Graph
//! storage, traversal and the matching search itself belong to the caller.

// Re-export the public API from isomorph-core
pub use isomorph_core::*;
