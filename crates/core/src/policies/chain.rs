//! Conjunction of several comparators
//!
//! Two elements are equivalent under a chain iff every member comparator
//! says so. The intersection of equivalence relations is itself an
//! equivalence relation, so the chain keeps the trait contract.
//!
//! ## Keys
//!
//! The chain key is the XXH3 digest of the member keys (little-endian, in
//! member order). Equivalent elements produce identical member keys and so
//! identical digests; the converse does not hold, which makes the chain a
//! hash-keyed policy even when all members are faithful.

use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::comparator::{ClassKey, EquivalenceComparator};
use crate::error::Result;

/// Ordered list of comparators combined with logical AND
///
/// # Examples
///
/// ```
/// use isomorph_core::{ComparatorChain, EquivalenceComparator, ParityClassifier, UniformComparator};
///
/// let chain = ComparatorChain::<i64>::new()
///     .with(ParityClassifier)
///     .with(UniformComparator);
/// assert!(chain.equivalent(&2, &6, &(), &()).unwrap());
/// assert!(!chain.equivalent(&2, &7, &(), &()).unwrap());
/// ```
pub struct ComparatorChain<E: ?Sized, C: ?Sized = ()> {
    members: Vec<Box<dyn EquivalenceComparator<E, C>>>,
}

impl<E: ?Sized, C: ?Sized> ComparatorChain<E, C> {
    /// Create an empty chain (equivalent to `UniformComparator`)
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a comparator, builder style
    pub fn with<Q>(mut self, comparator: Q) -> Self
    where
        Q: EquivalenceComparator<E, C> + 'static,
    {
        self.push(comparator);
        self
    }

    /// Append a comparator
    pub fn push<Q>(&mut self, comparator: Q)
    where
        Q: EquivalenceComparator<E, C> + 'static,
    {
        self.members.push(Box::new(comparator));
    }

    /// Number of member comparators
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the chain has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<E: ?Sized, C: ?Sized> Default for ComparatorChain<E, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized, C: ?Sized> fmt::Debug for ComparatorChain<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorChain")
            .field("members", &self.members.len())
            .finish()
    }
}

impl<E: ?Sized, C: ?Sized> EquivalenceComparator<E, C> for ComparatorChain<E, C> {
    /// Consults every member, so each one validates its domain even after
    /// another has already reported "not equivalent".
    fn equivalent(&self, a: &E, b: &E, ctx_a: &C, ctx_b: &C) -> Result<bool> {
        let mut all = true;
        for member in &self.members {
            all &= member.equivalent(a, b, ctx_a, ctx_b)?;
        }
        Ok(all)
    }

    fn class_key(&self, element: &E, ctx: &C) -> Result<ClassKey> {
        let mut hasher = Xxh3::new();
        for member in &self.members {
            hasher.update(&member.class_key(element, ctx)?.to_le_bytes());
        }
        Ok(hasher.digest() as ClassKey)
    }
}
