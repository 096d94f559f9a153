//! Core types and traits for isomorph
//!
//! This crate defines the equivalence-classification layer an isomorphism
//! engine uses to prune its search:
//! - EquivalenceComparator: the comparator contract (`equivalent` + `class_key`)
//! - ClassKey: integer bucket key consistent with `equivalent`
//! - Policies: ParityClassifier, UniformComparator, EqualityComparator, ComparatorChain
//! - IntegerDomain: boundary check for integer-only policies
//! - Value: dynamically typed element for untyped callers
//! - Partitioning: EquivalenceSet, partition, partitions_compatible
//! - PartitionOptions: TOML-configurable partitioning behaviour
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod config;
pub mod domain;
pub mod error;
pub mod partition;
pub mod policies;
pub mod value;

pub use comparator::{ClassKey, EquivalenceComparator};
pub use config::{ClassOrder, PartitionOptions};
pub use domain::IntegerDomain;
pub use error::{Error, Result};
pub use partition::{partition, partition_with, partitions_compatible, EquivalenceSet};
pub use policies::{ComparatorChain, EqualityComparator, ParityClassifier, UniformComparator};
pub use value::Value;
