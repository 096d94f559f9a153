//! Algebraic properties every comparator must satisfy
//!
//! Checked for the parity policy, a parity/mod-3 chain, and the uniform
//! policy over arbitrary integers and contexts.

use crate::common::*;
use isomorph::{ComparatorChain, ParityClassifier, UniformComparator};
use proptest::prelude::*;

fn chain() -> ComparatorChain<i64> {
    ComparatorChain::new().with(ParityClassifier).with(ModThree)
}

fn eq<Q: EquivalenceComparator<i64>>(q: &Q, a: i64, b: i64) -> bool {
    q.equivalent(&a, &b, &(), &()).unwrap()
}

fn key<Q: EquivalenceComparator<i64>>(q: &Q, a: i64) -> ClassKey {
    q.class_key(&a, &()).unwrap()
}

proptest! {
    #[test]
    fn reflexive(x in any::<i64>()) {
        prop_assert!(eq(&ParityClassifier, x, x));
        prop_assert!(eq(&chain(), x, x));
        prop_assert!(eq(&UniformComparator, x, x));
    }

    #[test]
    fn symmetric(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(eq(&ParityClassifier, x, y), eq(&ParityClassifier, y, x));
        prop_assert_eq!(eq(&chain(), x, y), eq(&chain(), y, x));
    }

    #[test]
    fn symmetric_with_swapped_contexts(x in any::<i64>(), y in any::<i64>(), c1 in any::<i64>(), c2 in any::<i64>()) {
        let (c1, c2) = (Value::Int(c1), Value::Int(c2));
        prop_assert_eq!(
            ParityClassifier.equivalent(&x, &y, &c1, &c2).unwrap(),
            ParityClassifier.equivalent(&y, &x, &c2, &c1).unwrap()
        );
    }

    #[test]
    fn transitive(x in -1000i64..1000, y in -1000i64..1000, z in -1000i64..1000) {
        if eq(&ParityClassifier, x, y) && eq(&ParityClassifier, y, z) {
            prop_assert!(eq(&ParityClassifier, x, z));
        }
        let c = chain();
        if eq(&c, x, y) && eq(&c, y, z) {
            prop_assert!(eq(&c, x, z));
        }
    }

    #[test]
    fn parity_key_relation_is_exact(x in any::<i64>(), y in any::<i64>()) {
        prop_assert_eq!(
            eq(&ParityClassifier, x, y),
            key(&ParityClassifier, x) == key(&ParityClassifier, y)
        );
    }

    #[test]
    fn chain_equivalence_implies_equal_keys(x in -500i64..500, y in -500i64..500) {
        let c = chain();
        if eq(&c, x, y) {
            prop_assert_eq!(key(&c, x), key(&c, y));
        }
    }

    #[test]
    fn parity_context_independent(x in any::<i64>(), y in any::<i64>(), label in ".*") {
        let ctx = Value::String(label);
        prop_assert_eq!(
            ParityClassifier.equivalent(&x, &y, &ctx, &Value::Null).unwrap(),
            eq(&ParityClassifier, x, y)
        );
        prop_assert_eq!(
            ParityClassifier.class_key(&x, &ctx).unwrap(),
            key(&ParityClassifier, x)
        );
    }

    #[test]
    fn class_key_deterministic(x in any::<i64>()) {
        let c = chain();
        prop_assert_eq!(key(&c, x), key(&c, x));
        prop_assert_eq!(key(&ParityClassifier, x), key(&ParityClassifier, x));
    }
}
