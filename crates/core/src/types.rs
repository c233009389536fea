//! Column and mutation data model
//!
//! This module defines the logical shape of a batch as the store's protocol
//! sees it:
//! - Column / SuperColumn: the values being written
//! - SlicePredicate / Deletion: what a delete targets
//! - Mutation: one write or one delete
//! - BatchMutation: row key bytes → column family → ordered mutations

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grouped mutations for one submission
///
/// Row key bytes → column family name → mutations in registration order.
pub type BatchMutation = BTreeMap<Vec<u8>, BTreeMap<String, Vec<Mutation>>>;

/// A named value with its write timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: Vec<u8>,
    /// Column value
    pub value: Vec<u8>,
    /// Write timestamp, used by the store for conflict resolution
    pub timestamp: Timestamp,
    /// Time-to-live in seconds; `None` keeps the column indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl Column {
    /// Create a column without a TTL
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, timestamp: Timestamp) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            timestamp,
            ttl: None,
        }
    }

    /// Expire the column `seconds` after it is written
    pub fn with_ttl(mut self, seconds: u32) -> Self {
        self.ttl = Some(seconds);
        self
    }
}

/// A named container of sub-columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperColumn {
    /// Super column name
    pub name: Vec<u8>,
    /// Sub-columns, in the order given by the caller
    pub columns: Vec<Column>,
}

impl SuperColumn {
    /// Create a super column
    pub fn new(name: impl Into<Vec<u8>>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// The payload of a write mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnOrSuperColumn {
    /// Write to a standard column
    Column(Column),
    /// Write sub-columns under a super column
    SuperColumn(SuperColumn),
}

/// Explicit list of column names a deletion targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicePredicate {
    /// Target column (or sub-column) names
    pub column_names: Vec<Vec<u8>>,
}

impl SlicePredicate {
    /// Predicate over the given names
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Vec<u8>>,
    {
        Self {
            column_names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// A timestamped delete
///
/// The predicate is deliberately `Option<SlicePredicate>`. Three cases are
/// distinct on the wire and must stay distinct here:
/// - `None`: no predicate; under a super column this removes every sub-column
/// - `Some` with no names: predicate present but empty
/// - `Some` with names: only those columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deletion {
    /// Timestamp of the delete; older writes are shadowed
    pub timestamp: Timestamp,
    /// Super column the deletion is scoped to, if any
    pub super_column: Option<Vec<u8>>,
    /// Target names, or `None` for the whole scope
    pub predicate: Option<SlicePredicate>,
}

/// One registered write or delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Column or super column write
    Write(ColumnOrSuperColumn),
    /// Deletion
    Delete(Deletion),
}

impl Mutation {
    /// Whether this is a write
    pub fn is_write(&self) -> bool {
        matches!(self, Mutation::Write(_))
    }

    /// Whether this is a deletion
    pub fn is_deletion(&self) -> bool {
        matches!(self, Mutation::Delete(_))
    }

    /// Timestamp carried by the mutation
    ///
    /// Super column writes report the first sub-column's timestamp, or `None`
    /// when they have no sub-columns.
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self {
            Mutation::Write(ColumnOrSuperColumn::Column(c)) => Some(c.timestamp),
            Mutation::Write(ColumnOrSuperColumn::SuperColumn(sc)) => {
                sc.columns.first().map(|c| c.timestamp)
            }
            Mutation::Delete(d) => Some(d.timestamp),
        }
    }
}
