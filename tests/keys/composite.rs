//! Composite Key Tests

use crate::determinism::arb_key;
use colbatch::{Key, KeyError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn composite_concatenation_is_associative(a in arb_key(), b in arb_key(), c in arb_key()) {
        let ab = Key::composite(vec![a.clone(), b.clone()]).unwrap();
        let just_c = Key::composite(vec![c.clone()]).unwrap();
        let abc = Key::composite(vec![a, b, c]).unwrap();

        let mut joined = ab.to_bytes();
        joined.extend(just_c.to_bytes());
        prop_assert_eq!(joined, abc.to_bytes());
    }

    #[test]
    fn single_child_composite_encodes_like_child(a in arb_key()) {
        let wrapped = Key::composite(vec![a.clone()]).unwrap();
        prop_assert_eq!(wrapped.to_bytes(), a.to_bytes());
    }
}

#[test]
fn empty_composite_is_a_precondition_violation() {
    let err = Key::composite(std::iter::empty::<Key>()).unwrap_err();
    assert_eq!(err, KeyError::EmptyComposite);
    assert_eq!(err.reason_code(), "empty_composite");
}

#[test]
fn composite_keeps_children() {
    let children = vec![Key::string("tenant"), Key::long(7)];
    let key = Key::composite(children.clone()).unwrap();
    assert_eq!(key.children(), Some(children.as_slice()));
    assert_eq!(key.to_string(), "tenant, 7");
}

#[test]
fn composite_of_fixed_width_children_can_be_split() {
    let key = Key::composite(vec![Key::integer(3), Key::long(-1)]).unwrap();
    let bytes = key.to_bytes();
    let (head, tail) = bytes.split_at(4);
    assert_eq!(i32::from_be_bytes(head.try_into().unwrap()), 3);
    assert_eq!(i64::from_be_bytes(tail.try_into().unwrap()), -1);
}
