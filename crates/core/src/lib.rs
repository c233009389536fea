//! Core types and traits for colbatch
//!
//! This crate defines the data model shared by the batching layer and the
//! transport that sends batches to the store:
//! - Key: row identifiers and their canonical byte encoding
//! - TimeUuid: version-1 UUIDs with a chronologically sortable encoding
//! - Timestamp: microsecond mutation timestamps
//! - Column, SuperColumn, Deletion, Mutation, BatchMutation: batch shape
//! - ConsistencyLevel: replica acknowledgement policy
//! - Error: error type hierarchy
//! - BatchSubmitter: the transport seam

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consistency;
pub mod error;
pub mod key;
pub mod time_uuid;
pub mod timestamp;
pub mod traits;
pub mod types;

pub use consistency::ConsistencyLevel;
pub use error::{Error, Result, SubmitError};
pub use key::{CompositeKey, Key, KeyError};
pub use time_uuid::TimeUuid;
pub use timestamp::Timestamp;
pub use traits::BatchSubmitter;
pub use types::{
    BatchMutation, Column, ColumnOrSuperColumn, Deletion, Mutation, SlicePredicate, SuperColumn,
};
