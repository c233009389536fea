//! Deletion Predicate Tests
//!
//! Absent, present-but-empty and named predicates stay distinct.

use crate::common::*;
use colbatch::{Key, SlicePredicate};

#[test]
fn delete_all_sub_columns_has_absent_predicate() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_all_sub_columns(&key, "cf", "super").unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert_eq!(d.super_column, Some(b"super".to_vec()));
    assert!(d.predicate.is_none());
}

#[test]
fn empty_sub_column_list_is_delete_all() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_sub_columns(&key, "cf", "super", Vec::<String>::new()).unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert!(d.predicate.is_none());
}

#[test]
fn named_sub_columns_are_kept_in_order() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_sub_columns(&key, "cf", "super", ["b", "a"]).unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert_eq!(
        d.predicate.as_ref().unwrap().column_names,
        vec![b"b".to_vec(), b"a".to_vec()]
    );
}

#[test]
fn empty_column_list_stays_present_but_empty() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_columns(&key, "cf", Vec::<&[u8]>::new()).unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert_eq!(d.predicate, Some(SlicePredicate::default()));
    assert_eq!(d.super_column, None);
}

#[test]
fn delete_columns_accepts_binary_names() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_columns(&key, "cf", [vec![0u8, 1], vec![0xFF]]).unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert_eq!(
        d.predicate,
        Some(SlicePredicate {
            column_names: vec![vec![0, 1], vec![0xFF]]
        })
    );
}

#[test]
fn single_sub_column_delete() {
    let (_, mut m) = test_mutator();
    let key = Key::string("row");
    m.delete_sub_column(&key, "cf", "super", "only").unwrap();

    let d = as_deletion(&m.mutations(&key, "cf").unwrap()[0]);
    assert_eq!(d.super_column, Some(b"super".to_vec()));
    assert_eq!(d.predicate, Some(SlicePredicate::from_names(["only"])));
}
