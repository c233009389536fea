//! In-memory submitter for tests
//!
//! Records everything it is asked to send and never touches the network.

use colbatch_core::{BatchMutation, BatchSubmitter, ConsistencyLevel, SubmitError, Timestamp};
use parking_lot::Mutex;

/// A recorded `remove_row` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRemoval {
    /// Encoded row key
    pub row_key: Vec<u8>,
    /// Column family
    pub column_family: String,
    /// Deletion timestamp
    pub timestamp: Timestamp,
    /// Requested level
    pub consistency: ConsistencyLevel,
}

/// Submitter that records calls and can be primed to fail
///
/// A primed failure is returned by the next call (batch or removal) and is
/// then cleared. Failed calls are not recorded.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    submissions: Mutex<Vec<(BatchMutation, ConsistencyLevel)>>,
    removals: Mutex<Vec<RecordedRemoval>>,
    fail_next: Mutex<Option<SubmitError>>,
}

impl RecordingSubmitter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `error`
    pub fn fail_next_with(&self, error: SubmitError) {
        *self.fail_next.lock() = Some(error);
    }

    /// Successful batch submissions, oldest first
    pub fn submissions(&self) -> Vec<(BatchMutation, ConsistencyLevel)> {
        self.submissions.lock().clone()
    }

    /// Number of successful batch submissions
    pub fn submission_count(&self) -> usize {
        self.submissions.lock().len()
    }

    /// Successful row removals, oldest first
    pub fn removals(&self) -> Vec<RecordedRemoval> {
        self.removals.lock().clone()
    }

    fn take_failure(&self) -> Result<(), SubmitError> {
        match self.fail_next.lock().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl BatchSubmitter for RecordingSubmitter {
    fn submit_batch(
        &self,
        batch: &BatchMutation,
        consistency: ConsistencyLevel,
    ) -> Result<(), SubmitError> {
        self.take_failure()?;
        self.submissions.lock().push((batch.clone(), consistency));
        Ok(())
    }

    fn remove_row(
        &self,
        row_key: &[u8],
        column_family: &str,
        timestamp: Timestamp,
        consistency: ConsistencyLevel,
    ) -> Result<(), SubmitError> {
        self.take_failure()?;
        self.removals.lock().push(RecordedRemoval {
            row_key: row_key.to_vec(),
            column_family: column_family.to_string(),
            timestamp,
            consistency,
        });
        Ok(())
    }
}
