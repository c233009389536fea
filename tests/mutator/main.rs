//! Mutator Integration Tests
//!
//! Tests for batch accumulation and submission:
//! - Grouping by row key and column family
//! - Deletion predicates
//! - Super column writes
//! - Execute lifecycle and failure propagation

#[path = "../common/mod.rs"]
mod common;

mod deletion_predicates;
mod grouping;
