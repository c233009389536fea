//! Time-UUID Ordering Tests
//!
//! Byte order of encoded time-UUID keys must match creation order.

use colbatch::{Key, KeyError, TimeUuid};
use proptest::prelude::*;

const NODE: [u8; 6] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];

proptest! {
    #[test]
    fn earlier_uuid_sorts_first(
        t1 in 0u64..(1 << 60),
        delta in 1u64..(1 << 40),
        c1 in any::<u16>(),
        c2 in any::<u16>(),
        n1 in any::<[u8; 6]>(),
        n2 in any::<[u8; 6]>(),
    ) {
        let t2 = t1.saturating_add(delta).min((1 << 60) - 1);
        prop_assume!(t1 < t2);

        let earlier = Key::time_uuid(TimeUuid::from_ticks(t1, c1, n1));
        let later = Key::time_uuid(TimeUuid::from_ticks(t2, c2, n2));
        prop_assert!(earlier.to_bytes() < later.to_bytes());
    }

    #[test]
    fn ordered_bytes_round_trip(t in 0u64..(1 << 60), c in 0u16..(1 << 14), n in any::<[u8; 6]>()) {
        let id = TimeUuid::from_ticks(t, c, n);
        let back = TimeUuid::from_ordered_bytes(id.to_ordered_bytes()).unwrap();
        prop_assert_eq!(back, id);
        prop_assert_eq!(back.ticks(), t);
        prop_assert_eq!(back.clock_seq(), c);
    }
}

#[test]
fn generated_uuids_sort_by_creation() {
    let ids: Vec<TimeUuid> = (0..100).map(|_| TimeUuid::now()).collect();
    let encoded: Vec<Vec<u8>> = ids.iter().map(|id| Key::time_uuid(*id).to_bytes()).collect();
    let mut sorted = encoded.clone();
    sorted.sort();
    assert_eq!(encoded, sorted);
}

#[test]
fn one_millisecond_apart() {
    let base = 1_279_152_000_000_000u64;
    let a = TimeUuid::from_unix_micros(base, 0x3fff, NODE);
    let b = TimeUuid::from_unix_micros(base + 1_000, 0, NODE);
    assert!(a.to_ordered_bytes() < b.to_ordered_bytes());
    assert_eq!(b.unix_micros() - a.unix_micros(), 1_000);
}

#[test]
fn parse_round_trips_through_display() {
    let text = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    let key = Key::parse_time_uuid(text).unwrap();
    assert_eq!(key.to_string(), text);
    assert_eq!(key.as_time_uuid().unwrap().to_string(), text);
}

#[test]
fn malformed_identifier_fails_locally() {
    assert!(matches!(
        Key::parse_time_uuid("6ba7b810-9dad-11d1"),
        Err(KeyError::InvalidUuid { .. })
    ));
}

#[test]
fn ordered_bytes_of_non_v1_are_rejected() {
    let mut bytes = TimeUuid::from_ticks(1, 1, NODE).to_ordered_bytes();
    // version nibble lives in the leading byte of the ordered layout
    bytes[0] = (bytes[0] & 0x0F) | 0x40;
    assert_eq!(
        TimeUuid::from_ordered_bytes(bytes),
        Err(KeyError::NotTimeUuid { version: 4 })
    );
}
