//! Equivalence comparator abstraction
//!
//! This module defines the [`EquivalenceComparator`] trait that an
//! isomorphism engine calls to split vertices (or edges) into invariant
//! groups. Only elements in matching groups need be considered as candidate
//! mappings, so a good comparator prunes the search before it starts.

use std::sync::Arc;

use crate::error::Result;

/// Integer key identifying a partition bucket
pub type ClassKey = i64;

/// Equivalence policy over elements of type `E` with per-element context `C`
///
/// # Contract
///
/// - `equivalent` is reflexive, symmetric and transitive over valid elements.
///   Partitioning relies on transitivity to build classes in one pass.
/// - `equivalent(a, b, ..)` implies `class_key(a, ..) == class_key(b, ..)`.
///   Faithful policies also guarantee the converse; hash-keyed policies may
///   collide, and partitioning confirms bucket membership with `equivalent`.
/// - Both operations are pure and deterministic.
/// - An element outside the policy's domain fails with
///   [`Error::TypeMismatch`](crate::Error::TypeMismatch) before any
///   comparison happens.
///
/// Thread safety: implementations must be `Send + Sync`; engines share one
/// comparator across worker threads without locking.
///
/// # Examples
///
/// ```
/// use isomorph_core::{EquivalenceComparator, ParityClassifier};
///
/// let parity = ParityClassifier;
/// assert!(parity.equivalent(&4i64, &10i64, &(), &()).unwrap());
/// assert_eq!(parity.class_key(&7i64, &()).unwrap(), 1);
/// ```
pub trait EquivalenceComparator<E: ?Sized, C: ?Sized = ()>: Send + Sync {
    /// Decide whether `a` and `b` are interchangeable under this policy
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if either element is outside the policy's domain.
    fn equivalent(&self, a: &E, b: &E, ctx_a: &C, ctx_b: &C) -> Result<bool>;

    /// Bucket key for `element`, consistent with [`equivalent`](Self::equivalent)
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the element is outside the policy's domain.
    fn class_key(&self, element: &E, ctx: &C) -> Result<ClassKey>;
}

impl<E, C, T> EquivalenceComparator<E, C> for &T
where
    E: ?Sized,
    C: ?Sized,
    T: EquivalenceComparator<E, C> + ?Sized,
{
    fn equivalent(&self, a: &E, b: &E, ctx_a: &C, ctx_b: &C) -> Result<bool> {
        (**self).equivalent(a, b, ctx_a, ctx_b)
    }

    fn class_key(&self, element: &E, ctx: &C) -> Result<ClassKey> {
        (**self).class_key(element, ctx)
    }
}

impl<E, C, T> EquivalenceComparator<E, C> for Box<T>
where
    E: ?Sized,
    C: ?Sized,
    T: EquivalenceComparator<E, C> + ?Sized,
{
    fn equivalent(&self, a: &E, b: &E, ctx_a: &C, ctx_b: &C) -> Result<bool> {
        (**self).equivalent(a, b, ctx_a, ctx_b)
    }

    fn class_key(&self, element: &E, ctx: &C) -> Result<ClassKey> {
        (**self).class_key(element, ctx)
    }
}

impl<E, C, T> EquivalenceComparator<E, C> for Arc<T>
where
    E: ?Sized,
    C: ?Sized,
    T: EquivalenceComparator<E, C> + ?Sized,
{
    fn equivalent(&self, a: &E, b: &E, ctx_a: &C, ctx_b: &C) -> Result<bool> {
        (**self).equivalent(a, b, ctx_a, ctx_b)
    }

    fn class_key(&self, element: &E, ctx: &C) -> Result<ClassKey> {
        (**self).class_key(element, ctx)
    }
}
