//! The submission seam
//!
//! The batching layer never talks to the network itself. It hands finished
//! work to a [`BatchSubmitter`], which owns connection acquisition, retries,
//! and failover.

use crate::consistency::ConsistencyLevel;
use crate::error::SubmitError;
use crate::timestamp::Timestamp;
use crate::types::BatchMutation;

/// Transport collaborator that sends work to the store
///
/// Thread safety: implementations are shared between mutators and must be
/// safe to call from multiple threads (requires Send + Sync).
pub trait BatchSubmitter: Send + Sync {
    /// Send a grouped batch as one request
    ///
    /// `consistency` is forwarded unchanged. A returned error covers the
    /// whole batch; there is no partial success.
    ///
    /// # Errors
    ///
    /// Returns whatever the transport reports: connection failure, timeout,
    /// or an unmet consistency level.
    fn submit_batch(
        &self,
        batch: &BatchMutation,
        consistency: ConsistencyLevel,
    ) -> Result<(), SubmitError>;

    /// Remove a row from one column family
    ///
    /// Succeeds even if the row does not exist.
    ///
    /// # Errors
    ///
    /// Returns whatever the transport reports.
    fn remove_row(
        &self,
        row_key: &[u8],
        column_family: &str,
        timestamp: Timestamp,
        consistency: ConsistencyLevel,
    ) -> Result<(), SubmitError>;
}
