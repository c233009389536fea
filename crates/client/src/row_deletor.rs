//! Row-level deletion
//!
//! Removes an entire row from one column family in a single request,
//! outside of any batch.

use crate::config::ClientConfig;
use colbatch_core::{BatchSubmitter, ConsistencyLevel, Error, Key, Result, Timestamp};
use std::sync::Arc;
use tracing::{debug, warn};

/// Deletes whole rows
///
/// Like [`Mutator`](crate::Mutator), a deletor carries one timestamp fixed at
/// construction; rows written after that timestamp are not affected.
pub struct RowDeletor {
    submitter: Arc<dyn BatchSubmitter>,
    timestamp: Timestamp,
    default_consistency: ConsistencyLevel,
}

impl RowDeletor {
    /// Create a deletor stamped with the current time
    pub fn new(submitter: Arc<dyn BatchSubmitter>) -> Self {
        Self::with_timestamp(submitter, Timestamp::now())
    }

    /// Create a deletor with an explicit timestamp
    pub fn with_timestamp(submitter: Arc<dyn BatchSubmitter>, timestamp: Timestamp) -> Self {
        Self {
            submitter,
            timestamp,
            default_consistency: ConsistencyLevel::default(),
        }
    }

    /// Create a deletor that uses the configured deletion consistency level
    pub fn from_config(submitter: Arc<dyn BatchSubmitter>, config: &ClientConfig) -> Self {
        let mut deletor = Self::new(submitter);
        deletor.default_consistency = config.deletion_consistency();
        deletor
    }

    /// Delete the row `row_key` from `column_family`
    ///
    /// Succeeds even if the row does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Submit`] with the submitter's failure.
    pub fn delete_row(
        &self,
        row_key: &Key,
        column_family: &str,
        consistency: ConsistencyLevel,
    ) -> Result<()> {
        debug!(
            target: "colbatch::deletor",
            row_key = %row_key,
            column_family,
            consistency = %consistency,
            "Deleting row"
        );
        self.submitter
            .remove_row(&row_key.to_bytes(), column_family, self.timestamp, consistency)
            .map_err(|e| {
                warn!(target: "colbatch::deletor", error = %e, "Row deletion failed");
                Error::Submit(e)
            })
    }

    /// Delete a row at the configured consistency level
    pub fn delete_row_default(&self, row_key: &Key, column_family: &str) -> Result<()> {
        self.delete_row(row_key, column_family, self.default_consistency)
    }

    /// The deletion timestamp
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
