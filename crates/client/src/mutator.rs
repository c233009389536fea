//! Batch mutation accumulator
//!
//! A [`Mutator`] collects column writes and deletions against
//! (row key, column family) pairs and sends them to the store as a single
//! request when [`Mutator::execute`] is called. Once executed, a mutator
//! cannot be reused.
//!
//! # Grouping
//!
//! Registrations are grouped by row key first, then by column family. Both
//! levels are created on first use. Within a column family, mutations keep
//! the order they were registered in; the store applies them in that order.
//!
//! # Timestamps
//!
//! A mutator carries exactly one timestamp, fixed at construction. Every
//! column it builds or registers and every deletion it registers uses that
//! timestamp.
//!
//! # Lifecycle
//!
//! 1. **BUILD**: `write_*` / `delete_*` append to the batch (`Building`)
//! 2. **EXECUTE**: `execute()` moves to `Executed`, then submits
//! 3. Any further `write_*`, `delete_*` or `execute` fails with
//!    [`Error::BatchExecuted`]
//!
//! A mutator is meant for one thread of control. It has no internal locking;
//! all registration methods take `&mut self`.

use crate::config::ClientConfig;
use colbatch_core::{
    BatchMutation, BatchSubmitter, Column, ColumnOrSuperColumn, ConsistencyLevel, Deletion,
    Error, Key, Mutation, Result, SlicePredicate, SuperColumn, Timestamp,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle state of a [`Mutator`]
///
/// `Building` → `Executed`; `Executed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    /// Accepting registrations
    Building,
    /// Submitted (successfully or not); no further use allowed
    Executed,
}

/// Mutations registered for one row key
struct RowMutations {
    key: Key,
    families: BTreeMap<String, Vec<Mutation>>,
}

/// Single-use batch of writes and deletions
///
/// # Example
///
/// ```
/// use colbatch_client::{testing::RecordingSubmitter, Mutator};
/// use colbatch_core::{ConsistencyLevel, Key};
/// use std::sync::Arc;
///
/// let submitter = Arc::new(RecordingSubmitter::new());
/// let mut mutator = Mutator::new(submitter.clone());
///
/// let user = Key::string("alice");
/// let name = mutator.new_column("name", "Alice");
/// mutator.write_column(&user, "Users", name).unwrap();
/// mutator.delete_column(&user, "Users", "temp").unwrap();
/// mutator.execute(ConsistencyLevel::Quorum).unwrap();
///
/// assert_eq!(submitter.submission_count(), 1);
/// assert!(mutator.execute(ConsistencyLevel::Quorum).is_err());
/// ```
pub struct Mutator {
    submitter: Arc<dyn BatchSubmitter>,
    timestamp: Timestamp,
    default_consistency: ConsistencyLevel,
    /// Rows in first-registration order
    rows: Vec<RowMutations>,
    /// Row key → position in `rows`
    index: HashMap<Key, usize>,
    state: BatchState,
}

impl Mutator {
    /// Create a batch stamped with the current time
    pub fn new(submitter: Arc<dyn BatchSubmitter>) -> Self {
        Self::with_timestamp(submitter, Timestamp::now())
    }

    /// Create a batch with an explicit timestamp
    pub fn with_timestamp(submitter: Arc<dyn BatchSubmitter>, timestamp: Timestamp) -> Self {
        debug!(target: "colbatch::mutator", timestamp = %timestamp, "Batch created");
        Self {
            submitter,
            timestamp,
            default_consistency: ConsistencyLevel::default(),
            rows: Vec::new(),
            index: HashMap::new(),
            state: BatchState::Building,
        }
    }

    /// Create a batch stamped with the current time, using the configured
    /// default consistency level for [`Mutator::execute_default`]
    pub fn from_config(submitter: Arc<dyn BatchSubmitter>, config: &ClientConfig) -> Self {
        let mut mutator = Self::new(submitter);
        mutator.default_consistency = config.default_consistency;
        mutator
    }

    // === Writes ===

    /// Write a column value
    ///
    /// The column is restamped with the batch timestamp; its name, value and
    /// TTL are kept.
    pub fn write_column(
        &mut self,
        row_key: &Key,
        column_family: &str,
        column: Column,
    ) -> Result<()> {
        let column = self.stamp(column);
        self.push(
            row_key,
            column_family,
            Mutation::Write(ColumnOrSuperColumn::Column(column)),
        )
    }

    /// Write several columns to one row, in order
    pub fn write_columns<I>(
        &mut self,
        row_key: &Key,
        column_family: &str,
        columns: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Column>,
    {
        self.ensure_building()?;
        for column in columns {
            self.write_column(row_key, column_family, column)?;
        }
        Ok(())
    }

    /// Write a single sub-column to a super column
    ///
    /// To write several sub-columns of the same super column, prefer
    /// [`Mutator::write_sub_columns`]: each call here adds a separate mutation.
    pub fn write_sub_column(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: impl Into<Vec<u8>>,
        sub_column: Column,
    ) -> Result<()> {
        self.write_sub_columns(row_key, column_family, super_column, vec![sub_column])
    }

    /// Write sub-columns to a super column
    ///
    /// Each call adds one super column mutation. Repeated calls for the same
    /// super column are not merged; the store applies them in order. Every
    /// sub-column is restamped with the batch timestamp.
    pub fn write_sub_columns(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: impl Into<Vec<u8>>,
        sub_columns: Vec<Column>,
    ) -> Result<()> {
        let sub_columns = sub_columns.into_iter().map(|c| self.stamp(c)).collect();
        let super_column = SuperColumn::new(super_column, sub_columns);
        self.push(
            row_key,
            column_family,
            Mutation::Write(ColumnOrSuperColumn::SuperColumn(super_column)),
        )
    }

    // === Deletes ===

    /// Delete a column or a whole super column
    pub fn delete_column(
        &mut self,
        row_key: &Key,
        column_family: &str,
        name: impl Into<Vec<u8>>,
    ) -> Result<()> {
        self.delete_columns(row_key, column_family, [name])
    }

    /// Delete columns or super columns by name
    ///
    /// The predicate is always present. An empty `names` list is sent as an
    /// empty predicate, not as "delete everything".
    pub fn delete_columns<I, N>(
        &mut self,
        row_key: &Key,
        column_family: &str,
        names: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: Into<Vec<u8>>,
    {
        let deletion = Deletion {
            timestamp: self.timestamp,
            super_column: None,
            predicate: Some(SlicePredicate::from_names(names)),
        };
        self.push(row_key, column_family, Mutation::Delete(deletion))
    }

    /// Delete one sub-column of a super column
    pub fn delete_sub_column(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: impl Into<Vec<u8>>,
        sub_column: impl Into<Vec<u8>>,
    ) -> Result<()> {
        self.delete_sub_columns(row_key, column_family, super_column, [sub_column])
    }

    /// Delete sub-columns of a super column
    ///
    /// An empty `sub_columns` list removes every sub-column: the deletion is
    /// sent without a predicate.
    pub fn delete_sub_columns<I, N>(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: impl Into<Vec<u8>>,
        sub_columns: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: Into<Vec<u8>>,
    {
        let predicate = SlicePredicate::from_names(sub_columns);
        let predicate = if predicate.column_names.is_empty() {
            None
        } else {
            Some(predicate)
        };
        self.push_super_deletion(row_key, column_family, super_column.into(), predicate)
    }

    /// Delete every sub-column of a super column
    pub fn delete_all_sub_columns(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: impl Into<Vec<u8>>,
    ) -> Result<()> {
        self.push_super_deletion(row_key, column_family, super_column.into(), None)
    }

    // === Execution ===

    /// Send the batch to the store in a single request
    ///
    /// The mutator is consumed by this call whether or not the submission
    /// succeeds. Submitter failures are returned unchanged as
    /// [`Error::Submit`].
    ///
    /// # Errors
    ///
    /// - [`Error::BatchExecuted`] if the batch was already executed; nothing
    ///   is sent
    /// - [`Error::Submit`] if the submitter reports a failure
    pub fn execute(&mut self, consistency: ConsistencyLevel) -> Result<()> {
        self.ensure_building()?;
        self.state = BatchState::Executed;

        let batch = self.to_batch();
        debug!(
            target: "colbatch::mutator",
            rows = batch.len(),
            mutations = self.mutation_count(),
            consistency = %consistency,
            "Submitting batch"
        );

        self.submitter
            .submit_batch(&batch, consistency)
            .map_err(|e| {
                warn!(target: "colbatch::mutator", error = %e, "Batch submission failed");
                Error::Submit(e)
            })
    }

    /// Execute at the configured default consistency level
    pub fn execute_default(&mut self) -> Result<()> {
        self.execute(self.default_consistency)
    }

    // === Column factories ===

    /// Build a column stamped with this batch's timestamp
    ///
    /// This does not register anything.
    pub fn new_column(&self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Column {
        Column::new(name, value, self.timestamp)
    }

    // === Timestamp ===

    /// The batch timestamp as 8 big-endian bytes
    ///
    /// With `micros_to_millis` the value is first truncated to milliseconds.
    pub fn mutation_timestamp(&self, micros_to_millis: bool) -> [u8; 8] {
        let value = if micros_to_millis {
            self.timestamp.as_millis()
        } else {
            self.timestamp.as_micros()
        };
        value.to_be_bytes()
    }

    /// The batch timestamp
    pub fn mutation_timestamp_value(&self) -> Timestamp {
        self.timestamp
    }

    // === Introspection ===

    /// Current lifecycle state
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Whether `execute` has been called
    pub fn is_executed(&self) -> bool {
        self.state == BatchState::Executed
    }

    /// Number of distinct row keys touched
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of registered mutations
    pub fn mutation_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.families.values())
            .map(Vec::len)
            .sum()
    }

    /// Mutations registered for one (row key, column family) pair
    pub fn mutations(&self, row_key: &Key, column_family: &str) -> Option<&[Mutation]> {
        let slot = *self.index.get(row_key)?;
        self.rows[slot]
            .families
            .get(column_family)
            .map(Vec::as_slice)
    }

    /// Grouped structure that `execute` hands to the submitter
    ///
    /// Row keys are replaced by their byte encoding. Distinct keys that encode
    /// to the same bytes share one entry; their per-family lists are
    /// concatenated in the order the rows were first registered.
    pub fn to_batch(&self) -> BatchMutation {
        let mut batch = BatchMutation::new();
        for row in &self.rows {
            let families = batch.entry(row.key.to_bytes()).or_default();
            for (column_family, mutations) in &row.families {
                families
                    .entry(column_family.clone())
                    .or_default()
                    .extend(mutations.iter().cloned());
            }
        }
        batch
    }

    // === Internals ===

    fn ensure_building(&self) -> Result<()> {
        match self.state {
            BatchState::Building => Ok(()),
            BatchState::Executed => {
                warn!(target: "colbatch::mutator", "Batch used after execute");
                Err(Error::BatchExecuted)
            }
        }
    }

    fn stamp(&self, mut column: Column) -> Column {
        column.timestamp = self.timestamp;
        column
    }

    fn push_super_deletion(
        &mut self,
        row_key: &Key,
        column_family: &str,
        super_column: Vec<u8>,
        predicate: Option<SlicePredicate>,
    ) -> Result<()> {
        let deletion = Deletion {
            timestamp: self.timestamp,
            super_column: Some(super_column),
            predicate,
        };
        self.push(row_key, column_family, Mutation::Delete(deletion))
    }

    fn push(&mut self, row_key: &Key, column_family: &str, mutation: Mutation) -> Result<()> {
        self.ensure_building()?;
        self.mutation_list(row_key, column_family).push(mutation);
        Ok(())
    }

    fn mutation_list(&mut self, row_key: &Key, column_family: &str) -> &mut Vec<Mutation> {
        let slot = match self.index.get(row_key) {
            Some(&slot) => slot,
            None => {
                let slot = self.rows.len();
                self.rows.push(RowMutations {
                    key: row_key.clone(),
                    families: BTreeMap::new(),
                });
                self.index.insert(row_key.clone(), slot);
                slot
            }
        };
        self.rows[slot]
            .families
            .entry(column_family.to_string())
            .or_default()
    }
}
