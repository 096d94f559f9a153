//! Odd/even grouping of integers
//!
//! The minimal non-trivial comparator: two classes, with a key computed
//! independently of pairwise comparison yet consistent with it.
//!
//! Residues use Euclidean modulo, so negative integers land in the same two
//! classes as positive ones (`-1` and `1` are both odd, key `1`). A plain
//! remainder would yield `-1` for negative odd numbers and split odds in two.

use crate::comparator::{ClassKey, EquivalenceComparator};
use crate::domain::IntegerDomain;
use crate::error::Result;

/// Partitions integers into evens (key 0) and odds (key 1)
///
/// Contexts are accepted for contract compliance and never inspected.
/// Non-integer elements (e.g. [`Value::Float`](crate::Value::Float)) fail
/// with `TypeMismatch`.
///
/// # Examples
///
/// ```
/// use isomorph_core::{EquivalenceComparator, ParityClassifier, Value};
///
/// let parity = ParityClassifier;
/// assert!(parity.equivalent(&-1i64, &1i64, &(), &()).unwrap());
/// assert_eq!(parity.class_key(&Value::Int(8), &()).unwrap(), ParityClassifier::EVEN);
/// assert!(parity.class_key(&Value::Float(8.0), &()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParityClassifier;

impl ParityClassifier {
    /// Key of the even class
    pub const EVEN: ClassKey = 0;
    /// Key of the odd class
    pub const ODD: ClassKey = 1;

    fn residue<E: IntegerDomain + ?Sized>(element: &E) -> Result<ClassKey> {
        let n = element.to_integer()?;
        Ok(n.rem_euclid(2) as ClassKey)
    }
}

impl<E, C> EquivalenceComparator<E, C> for ParityClassifier
where
    E: IntegerDomain + ?Sized,
    C: ?Sized,
{
    fn equivalent(&self, a: &E, b: &E, _ctx_a: &C, _ctx_b: &C) -> Result<bool> {
        // Both sides are validated before comparing.
        let ra = Self::residue(a)?;
        let rb = Self::residue(b)?;
        Ok(ra == rb)
    }

    fn class_key(&self, element: &E, _ctx: &C) -> Result<ClassKey> {
        Self::residue(element)
    }
}
