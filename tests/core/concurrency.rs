//! Comparators shared across threads without synchronization

use std::sync::Arc;
use std::thread;

use crate::common::*;
use isomorph::{partition, ComparatorChain, ParityClassifier};

#[test]
fn parity_shared_by_reference_across_threads() {
    let parity = ParityClassifier;

    thread::scope(|s| {
        for t in 0..8i64 {
            let parity = &parity;
            s.spawn(move || {
                for n in (t * 1000)..((t + 1) * 1000) {
                    let key = parity.class_key(&n, &()).unwrap();
                    assert_eq!(key, n.rem_euclid(2));
                    assert!(parity.equivalent(&n, &(n + 2), &(), &()).unwrap());
                }
            });
        }
    });
}

#[test]
fn boxed_chain_shared_through_arc() {
    let chain: Arc<dyn EquivalenceComparator<i64>> =
        Arc::new(ComparatorChain::<i64>::new().with(ParityClassifier).with(ModThree));
    let expected = partition(0i64..60, &*chain, &()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let chain = Arc::clone(&chain);
            thread::spawn(move || partition(0i64..60, &*chain, &()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
