//! colbatch - row-key encoding and batch mutations for column-family stores
//!
//! colbatch turns application row identifiers into the byte keys a
//! column-family store expects, and accumulates writes and deletions into a
//! single batch that is sent as one request.
//!
//! # Quick Start
//!
//! ```
//! use colbatch::{testing::RecordingSubmitter, ConsistencyLevel, Key, Mutator};
//! use std::sync::Arc;
//!
//! let submitter = Arc::new(RecordingSubmitter::new());
//! let mut mutator = Mutator::new(submitter.clone());
//!
//! let alice = Key::string("alice");
//! let email = mutator.new_column("email", "a@x.com");
//! mutator.write_column(&alice, "Users", email)?;
//! mutator.delete_all_sub_columns(&alice, "Sessions", "web")?;
//! mutator.execute(ConsistencyLevel::Quorum)?;
//! # Ok::<(), colbatch::Error>(())
//! ```
//!
//! # Architecture
//!
//! The network is not part of this crate. Batches are handed to a
//! [`BatchSubmitter`], which owns connections, retries, and failover.

pub use colbatch_client::*;
pub use colbatch_core::*;
