//! Microsecond-precision mutation timestamp
//!
//! Every write and deletion in a batch carries the same timestamp. The store
//! resolves conflicting writes to the same column by comparing these values,
//! so they must use the unit the store expects: microseconds since the Unix
//! epoch.
//!
//! ```
//! use colbatch_core::Timestamp;
//!
//! let ts = Timestamp::from_millis(1_500);
//! assert_eq!(ts.as_micros(), 1_500_000);
//! assert_eq!(ts.as_millis(), 1_500);
//! ```

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds since Unix epoch
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are always in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Timestamp for the current moment
    ///
    /// Derived from wall-clock milliseconds scaled by 1000, so the sub-millisecond
    /// digits are always zero. Returns epoch if the clock is before 1970.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Timestamp::from_millis(millis)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from milliseconds since epoch
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Timestamp(millis.saturating_mul(1_000))
    }

    /// Microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Milliseconds since Unix epoch (truncates)
    #[inline]
    pub const fn as_millis(&self) -> u64 {
        self.0 / 1_000
    }

    /// Big-endian 8-byte encoding of the microsecond value
    pub fn to_be_bytes(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:06}", self.0 / 1_000_000, self.0 % 1_000_000)
    }
}

impl From<u64> for Timestamp {
    fn from(micros: u64) -> Self {
        Timestamp::from_micros(micros)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
