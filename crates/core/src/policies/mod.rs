//! Concrete comparator policies
//!
//! | Policy | Domain | Key | Faithful |
//! |--------|--------|-----|----------|
//! | `ParityClassifier` | integers | `n mod 2` | yes |
//! | `UniformComparator` | anything | `0` | yes |
//! | `EqualityComparator` | `Eq + Hash` | Fx hash | no |
//! | `ComparatorChain` | members' domains | XXH3 of member keys | no |
//!
//! A faithful policy guarantees equal keys only for equivalent elements, so
//! partitioning may trust its keys alone.

pub mod chain;
pub mod equality;
pub mod parity;
pub mod uniform;

pub use chain::ComparatorChain;
pub use equality::EqualityComparator;
pub use parity::ParityClassifier;
pub use uniform::UniformComparator;
