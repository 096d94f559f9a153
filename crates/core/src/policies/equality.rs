//! Equality-based policy
//!
//! Classes are the `Eq` classes of the element type. The key is a 64-bit Fx
//! hash, so distinct elements can share a key; partitioning resolves such
//! collisions with `equivalent`.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rustc_hash::FxHasher;

use crate::comparator::{ClassKey, EquivalenceComparator};
use crate::error::Result;

/// Groups elements that compare equal with `==`
///
/// Generic over `E` so it can be named as a concrete type; construct with
/// [`EqualityComparator::new`] or `Default`.
pub struct EqualityComparator<E: ?Sized> {
    _element: PhantomData<fn(&E)>,
}

impl<E: ?Sized> EqualityComparator<E> {
    /// Create a new equality comparator
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<E: ?Sized> Default for EqualityComparator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> Clone for EqualityComparator<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for EqualityComparator<E> {}

impl<E: ?Sized> std::fmt::Debug for EqualityComparator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EqualityComparator").finish()
    }
}

impl<E, C> EquivalenceComparator<E, C> for EqualityComparator<E>
where
    E: Eq + Hash + ?Sized,
    C: ?Sized,
{
    fn equivalent(&self, a: &E, b: &E, _ctx_a: &C, _ctx_b: &C) -> Result<bool> {
        Ok(a == b)
    }

    fn class_key(&self, element: &E, _ctx: &C) -> Result<ClassKey> {
        let mut hasher = FxHasher::default();
        element.hash(&mut hasher);
        Ok(hasher.finish() as ClassKey)
    }
}
