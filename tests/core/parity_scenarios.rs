//! Concrete scenarios for the odd/even policy

use crate::common::*;
use isomorph::{Error, ParityClassifier};

const P: ParityClassifier = ParityClassifier;

#[test]
fn both_even_are_equivalent() {
    assert!(P.equivalent(&4i64, &10i64, &Value::Null, &Value::Null).unwrap());
}

#[test]
fn odd_and_even_are_not_equivalent() {
    assert!(!P.equivalent(&3i64, &8i64, &Value::Null, &Value::Null).unwrap());
}

#[test]
fn class_keys_are_zero_and_one() {
    assert_eq!(P.class_key(&7i64, &Value::Null).unwrap(), 1);
    assert_eq!(P.class_key(&8i64, &Value::Null).unwrap(), 0);
}

#[test]
fn negatives_partition_into_the_same_two_classes() {
    assert!(P.equivalent(&-2i64, &4i64, &(), &()).unwrap());
    assert!(!P.equivalent(&-1i64, &2i64, &(), &()).unwrap());
    assert!(P.equivalent(&-1i64, &1i64, &(), &()).unwrap());
    assert_eq!(
        P.class_key(&-3i64, &()).unwrap(),
        P.class_key(&5i64, &()).unwrap()
    );

    let keys: std::collections::BTreeSet<ClassKey> = (-10i64..=10)
        .map(|n| P.class_key(&n, &()).unwrap())
        .collect();
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn value_elements_classify_like_integers() {
    assert!(P.equivalent(&Value::Int(-2), &Value::Int(4), &(), &()).unwrap());
    assert_eq!(P.class_key(&Value::Int(-3), &()).unwrap(), 1);
}

#[test]
fn non_integer_elements_fail_with_type_mismatch() {
    for bad in non_integer_values() {
        let expected = Error::type_mismatch("Int", bad.type_name());

        assert_eq!(P.class_key(&bad, &()).unwrap_err(), expected);
        assert_eq!(
            P.equivalent(&bad, &Value::Int(2), &(), &()).unwrap_err(),
            expected
        );
        assert_eq!(
            P.equivalent(&Value::Int(2), &bad, &(), &()).unwrap_err(),
            expected
        );
    }
}

#[test]
fn type_mismatch_message_names_both_types() {
    let err = P.class_key(&Value::Float(1.0), &()).unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected Int, got Float");
}
