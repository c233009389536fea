//! Time-based (version 1) UUIDs with a chronologically sortable byte layout
//!
//! A v1 UUID stores its 60-bit timestamp split across three fields in the
//! order `time_low | time_mid | time_hi_and_version`. Serialized in that
//! order, two identifiers do not sort by creation time. The store's time-UUID
//! comparator expects the fields reversed so that plain lexicographic byte
//! comparison is chronological:
//!
//! ```text
//! RFC 4122:  time_low(4) time_mid(2) time_hi_and_version(2) clock_seq(2) node(6)
//! ordered:   time_hi_and_version(2) time_mid(2) time_low(4) clock_seq(2) node(6)
//! ```
//!
//! The version nibble is the same for every v1 UUID, so leaving it in the
//! leading byte does not disturb the ordering.

use crate::key::KeyError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// 100ns intervals between the Gregorian epoch (1582-10-15) and the Unix epoch
pub const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;

const TICKS_MASK: u64 = 0x0FFF_FFFF_FFFF_FFFF;
const CLOCK_SEQ_MASK: u16 = 0x3FFF;

/// Last tick count handed out by [`TimeUuid::now`]
static LAST_TICKS: AtomicU64 = AtomicU64::new(0);

/// Per-process clock sequence and node id
///
/// The node id is random with the multicast bit set, as RFC 4122 §4.5
/// prescribes for hosts that do not use a MAC address.
static CLOCK_SEQ_AND_NODE: Lazy<(u16, [u8; 6])> = Lazy::new(|| {
    let mut node: [u8; 6] = rand::random();
    node[0] |= 0x01;
    (rand::random::<u16>() & CLOCK_SEQ_MASK, node)
});

/// A validated version-1 UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct TimeUuid(Uuid);

impl TimeUuid {
    /// Wrap a UUID, rejecting anything that is not version 1
    pub fn new(uuid: Uuid) -> Result<Self, KeyError> {
        match uuid.get_version_num() {
            1 => Ok(Self(uuid)),
            version => Err(KeyError::NotTimeUuid { version }),
        }
    }

    /// Parse the hyphenated (or simple) textual form
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        let uuid = Uuid::parse_str(s).map_err(|e| KeyError::InvalidUuid {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(uuid)
    }

    /// Build a v1 UUID from its raw parts
    ///
    /// `ticks` counts 100ns intervals since 1582-10-15; only the low 60 bits
    /// are used. Only the low 14 bits of `clock_seq` are used.
    pub fn from_ticks(ticks: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        let ts = uuid::Timestamp::from_gregorian(ticks & TICKS_MASK, clock_seq & CLOCK_SEQ_MASK);
        Self(Uuid::new_v1(ts, &node))
    }

    /// Build a v1 UUID for a Unix time in microseconds
    pub fn from_unix_micros(micros: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        Self::from_ticks(
            micros.saturating_mul(10).saturating_add(GREGORIAN_OFFSET),
            clock_seq,
            node,
        )
    }

    /// Generate a UUID for the current moment
    ///
    /// Successive calls within a process always produce strictly increasing
    /// tick counts, even when the wall clock stalls or steps backwards.
    pub fn now() -> Self {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let candidate = (wall.as_nanos() / 100) as u64 + GREGORIAN_OFFSET;

        let previous = LAST_TICKS
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(candidate.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        let ticks = candidate.max(previous + 1);

        let (clock_seq, node) = *CLOCK_SEQ_AND_NODE;
        Self::from_ticks(ticks, clock_seq, node)
    }

    /// 60-bit count of 100ns intervals since 1582-10-15
    pub fn ticks(&self) -> u64 {
        self.gregorian().0
    }

    /// Creation time as microseconds since the Unix epoch
    ///
    /// Saturates at zero for UUIDs stamped before 1970.
    pub fn unix_micros(&self) -> u64 {
        self.ticks().saturating_sub(GREGORIAN_OFFSET) / 10
    }

    /// 14-bit clock sequence
    pub fn clock_seq(&self) -> u16 {
        self.gregorian().1
    }

    fn gregorian(&self) -> (u64, u16) {
        // Only v1 UUIDs are ever wrapped, and those always carry a timestamp.
        self.0
            .get_timestamp()
            .map(|ts| ts.to_gregorian())
            .unwrap_or_default()
    }

    /// The wrapped UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Encode with the timestamp fields reordered most-significant first
    pub fn to_ordered_bytes(&self) -> [u8; 16] {
        let b = self.0.as_bytes();
        [
            b[6], b[7], b[4], b[5], b[0], b[1], b[2], b[3], b[8], b[9], b[10], b[11], b[12],
            b[13], b[14], b[15],
        ]
    }

    /// Inverse of [`TimeUuid::to_ordered_bytes`]
    pub fn from_ordered_bytes(bytes: [u8; 16]) -> Result<Self, KeyError> {
        let b = bytes;
        let rfc = [
            b[4], b[5], b[6], b[7], b[2], b[3], b[0], b[1], b[8], b[9], b[10], b[11], b[12],
            b[13], b[14], b[15],
        ];
        Self::new(Uuid::from_bytes(rfc))
    }
}

impl TryFrom<Uuid> for TimeUuid {
    type Error = KeyError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        Self::new(uuid)
    }
}

impl From<TimeUuid> for Uuid {
    fn from(id: TimeUuid) -> Self {
        id.0
    }
}

impl FromStr for TimeUuid {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
