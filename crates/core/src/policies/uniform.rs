//! Single-class policy

use crate::comparator::{ClassKey, EquivalenceComparator};
use crate::error::Result;

/// Treats every element as equivalent to every other
///
/// Useful as the neutral comparator when an engine requires one but the
/// caller has no invariant to offer (e.g. unlabeled edges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UniformComparator;

impl UniformComparator {
    /// The only key this policy produces
    pub const KEY: ClassKey = 0;
}

impl<E: ?Sized, C: ?Sized> EquivalenceComparator<E, C> for UniformComparator {
    fn equivalent(&self, _a: &E, _b: &E, _ctx_a: &C, _ctx_b: &C) -> Result<bool> {
        Ok(true)
    }

    fn class_key(&self, _element: &E, _ctx: &C) -> Result<ClassKey> {
        Ok(Self::KEY)
    }
}
