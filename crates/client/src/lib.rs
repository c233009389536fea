//! Batch mutation client for colbatch
//!
//! This crate builds the requests that modify data:
//! - Mutator: single-use accumulator of writes and deletions, sent as one batch
//! - RowDeletor: whole-row deletion
//! - ClientConfig: default consistency levels from `colbatch.toml`
//! - testing: in-memory `BatchSubmitter` for tests

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod mutator;
pub mod row_deletor;
pub mod testing;

pub use config::{ClientConfig, CONFIG_FILE_NAME};
pub use mutator::{BatchState, Mutator};
pub use row_deletor::RowDeletor;
