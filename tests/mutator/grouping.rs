//! Grouping Tests
//!
//! Registrations are grouped row key → column family → ordered list.

use crate::common::*;
use colbatch::{ConsistencyLevel, Key, SlicePredicate};

#[test]
fn users_scenario_produces_one_submission() {
    let (submitter, mut m) = test_mutator();
    let k1 = Key::string("K1");
    let k2 = Key::string("K2");

    m.write_column(&k1, "Users", column("name", "Alice")).unwrap();
    m.write_column(&k1, "Users", column("email", "a@x.com")).unwrap();
    m.delete_column(&k2, "Users", "temp").unwrap();
    m.execute(ConsistencyLevel::Quorum).unwrap();

    let submissions = submitter.submissions();
    assert_eq!(submissions.len(), 1);
    let (batch, consistency) = &submissions[0];
    assert_eq!(*consistency, ConsistencyLevel::Quorum);
    assert_eq!(batch.len(), 2);

    let k1_users = &batch[&b"K1".to_vec()]["Users"];
    assert_eq!(
        k1_users,
        &vec![write("name", "Alice"), write("email", "a@x.com")]
    );

    let k2_users = &batch[&b"K2".to_vec()]["Users"];
    assert_eq!(k2_users.len(), 1);
    let d = as_deletion(&k2_users[0]);
    assert_eq!(d.predicate, Some(SlicePredicate::from_names(["temp"])));
    assert_eq!(d.timestamp, TEST_TIMESTAMP);
}

#[test]
fn column_families_under_one_row_are_independent() {
    let (_, mut m) = test_mutator();
    let key = Key::long(9);

    m.write_column(&key, "A", column("a1", "x")).unwrap();
    m.write_column(&key, "B", column("b1", "y")).unwrap();
    m.write_column(&key, "A", column("a2", "z")).unwrap();

    assert_eq!(m.row_count(), 1);
    assert_eq!(
        m.mutations(&key, "A").unwrap(),
        &[write("a1", "x"), write("a2", "z")][..]
    );
    assert_eq!(m.mutations(&key, "B").unwrap(), &[write("b1", "y")][..]);
}

#[test]
fn write_columns_preserves_order() {
    let (_, mut m) = test_mutator();
    let key = Key::integer(1);
    let columns = vec![column("c", "3"), column("a", "1"), column("b", "2")];

    m.write_columns(&key, "cf", columns).unwrap();

    assert_eq!(
        m.mutations(&key, "cf").unwrap(),
        &[write("c", "3"), write("a", "1"), write("b", "2")][..]
    );
}

#[test]
fn rows_are_keyed_by_semantic_identity() {
    let (_, mut m) = test_mutator();
    m.write_column(&Key::string("same"), "cf", column("a", "1")).unwrap();
    m.write_column(&Key::string("same"), "cf", column("b", "2")).unwrap();
    m.write_column(&Key::integer(1), "cf", column("c", "3")).unwrap();
    m.write_column(&Key::long(1), "cf", column("d", "4")).unwrap();

    assert_eq!(m.row_count(), 3);
    assert_eq!(m.mutation_count(), 4);
}

#[test]
fn composite_and_time_uuid_keys_are_encoded_in_batch() {
    let (submitter, mut m) = test_mutator();
    let composite = Key::composite(vec![Key::string("t"), Key::integer(2)]).unwrap();
    let event = Key::parse_time_uuid("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();

    m.write_column(&composite, "cf", column("a", "1")).unwrap();
    m.write_column(&event, "cf", column("b", "2")).unwrap();
    m.execute(ConsistencyLevel::One).unwrap();

    let (batch, _) = &submitter.submissions()[0];
    assert!(batch.contains_key(&vec![b't', 0, 0, 0, 2]));
    assert!(batch.contains_key(&event.to_bytes()));
}

#[test]
fn every_mutation_shares_the_batch_timestamp() {
    let (_, mut m) = test_mutator();
    let key = Key::string("k");
    let col = m.new_column("a", "1");
    m.write_column(&key, "cf", col).unwrap();
    m.delete_column(&key, "cf", "b").unwrap();
    m.delete_all_sub_columns(&key, "super", "sc").unwrap();

    for mutation in m.mutations(&key, "cf").unwrap() {
        assert_eq!(mutation.timestamp(), Some(TEST_TIMESTAMP));
    }
    assert_eq!(
        m.mutations(&key, "super").unwrap()[0].timestamp(),
        Some(TEST_TIMESTAMP)
    );
}
