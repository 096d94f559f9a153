//! Partitioning elements into equivalence sets
//!
//! This is the step an isomorphism engine runs once per graph before any
//! matching search:
//!
//! 1. compute each element's class key (one `class_key` call per element)
//! 2. within the key's bucket, join the first set whose representative is
//!    `equivalent` to the element, or open a new set
//! 3. order the sets per [`PartitionOptions::order`]
//!
//! Step 2 makes the result correct for hash-keyed policies whose keys can
//! collide. Transitivity of `equivalent` is what allows comparing against
//! the representative alone.
//!
//! Two graphs can only be isomorphic if their partitions pair up set by set;
//! [`partitions_compatible`] checks that before the search starts.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::comparator::{ClassKey, EquivalenceComparator};
use crate::config::{ClassOrder, PartitionOptions};
use crate::error::Result;

/// A non-empty group of pairwise equivalent elements
///
/// Members keep their input order; the first member is the representative.
#[derive(Debug, Clone, PartialEq)]
pub struct EquivalenceSet<E> {
    key: ClassKey,
    members: Vec<E>,
}

impl<E> EquivalenceSet<E> {
    /// Class key shared by every member
    pub fn key(&self) -> ClassKey {
        self.key
    }

    /// Members in input order
    pub fn members(&self) -> &[E] {
        &self.members
    }

    /// First member of the set
    pub fn representative(&self) -> &E {
        &self.members[0]
    }

    /// Number of members (at least one)
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; sets are created with their first member
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consume the set, returning its members
    pub fn into_members(self) -> Vec<E> {
        self.members
    }

    /// Check whether this set can be mapped onto `other`
    ///
    /// Compatible sets have the same size, the same key, and equivalent
    /// representatives. `ctx_self` and `ctx_other` are the contexts of the two
    /// host graphs.
    ///
    /// # Errors
    ///
    /// Propagates `TypeMismatch` from the comparator.
    pub fn is_compatible_with<C, Q>(
        &self,
        other: &EquivalenceSet<E>,
        comparator: &Q,
        ctx_self: &C,
        ctx_other: &C,
    ) -> Result<bool>
    where
        C: ?Sized,
        Q: EquivalenceComparator<E, C> + ?Sized,
    {
        if self.len() != other.len() || self.key != other.key {
            return Ok(false);
        }
        comparator.equivalent(self.representative(), other.representative(), ctx_self, ctx_other)
    }
}

/// Partition `elements` with default [`PartitionOptions`]
///
/// # Errors
///
/// Returns the first `TypeMismatch` raised by the comparator; no partial
/// partition is returned.
///
/// # Examples
///
/// ```
/// use isomorph_core::{partition, ParityClassifier};
///
/// let sets = partition(vec![1i64, 2, 3, 4, 5, 6], &ParityClassifier, &()).unwrap();
/// assert_eq!(sets.len(), 2);
/// assert_eq!(sets[0].members(), &[2, 4, 6]);
/// assert_eq!(sets[1].members(), &[1, 3, 5]);
/// ```
pub fn partition<E, C, Q, I>(elements: I, comparator: &Q, ctx: &C) -> Result<Vec<EquivalenceSet<E>>>
where
    I: IntoIterator<Item = E>,
    C: ?Sized,
    Q: EquivalenceComparator<E, C> + ?Sized,
{
    partition_with(elements, comparator, ctx, &PartitionOptions::default())
}

/// Partition `elements` into equivalence sets sharing one context
///
/// # Errors
///
/// Returns the first `TypeMismatch` raised by the comparator; no partial
/// partition is returned.
pub fn partition_with<E, C, Q, I>(
    elements: I,
    comparator: &Q,
    ctx: &C,
    options: &PartitionOptions,
) -> Result<Vec<EquivalenceSet<E>>>
where
    I: IntoIterator<Item = E>,
    C: ?Sized,
    Q: EquivalenceComparator<E, C> + ?Sized,
{
    let mut sets: Vec<EquivalenceSet<E>> = Vec::new();
    // key -> indices into `sets`
    let mut buckets: FxHashMap<ClassKey, Vec<usize>> = FxHashMap::default();
    let mut element_count = 0usize;
    let mut collisions = 0usize;

    for element in elements {
        element_count += 1;
        let key = comparator.class_key(&element, ctx)?;
        let bucket = buckets.entry(key).or_default();

        let mut target = None;
        if options.verify_members {
            for &idx in bucket.iter() {
                if comparator.equivalent(sets[idx].representative(), &element, ctx, ctx)? {
                    target = Some(idx);
                    break;
                }
            }
            if target.is_none() && !bucket.is_empty() {
                collisions += 1;
                trace!(key, "Class key shared by non-equivalent elements");
            }
        } else {
            target = bucket.first().copied();
        }

        match target {
            Some(idx) => sets[idx].members.push(element),
            None => {
                bucket.push(sets.len());
                sets.push(EquivalenceSet {
                    key,
                    members: vec![element],
                });
            }
        }
    }

    // Sorts are stable, so ties keep first-seen order.
    match options.order {
        ClassOrder::Size => sets.sort_by(|a, b| a.len().cmp(&b.len()).then(a.key.cmp(&b.key))),
        ClassOrder::Key => sets.sort_by_key(|set| set.key),
        ClassOrder::FirstSeen => {}
    }

    debug!(
        elements = element_count,
        classes = sets.len(),
        collisions,
        "Partitioned elements into equivalence sets"
    );
    Ok(sets)
}

/// Check whether two partitions pair up one-to-one with compatible sets
///
/// A `false` result proves the host graphs are not isomorphic under the
/// comparator; `true` only means the search cannot be pruned at this level.
///
/// Compatibility is an equivalence relation on sets, so greedy pairing finds
/// a perfect pairing whenever one exists.
///
/// # Errors
///
/// Propagates `TypeMismatch` from the comparator.
pub fn partitions_compatible<E, C, Q>(
    left: &[EquivalenceSet<E>],
    right: &[EquivalenceSet<E>],
    comparator: &Q,
    ctx_left: &C,
    ctx_right: &C,
) -> Result<bool>
where
    C: ?Sized,
    Q: EquivalenceComparator<E, C> + ?Sized,
{
    if left.len() != right.len() {
        return Ok(false);
    }

    let mut paired = vec![false; right.len()];
    for set in left {
        let mut found = false;
        for (idx, candidate) in right.iter().enumerate() {
            if paired[idx] {
                continue;
            }
            if set.is_compatible_with(candidate, comparator, ctx_left, ctx_right)? {
                paired[idx] = true;
                found = true;
                break;
            }
        }
        if !found {
            debug!(key = set.key, size = set.len(), "No compatible class in other partition");
            return Ok(false);
        }
    }
    Ok(true)
}
