//! Replica acknowledgement levels
//!
//! The level is chosen by the caller and forwarded to the submitter as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many replicas must acknowledge a write before it succeeds
///
/// Names follow the store protocol (`ONE`, `QUORUM`, ...). In config files
/// they are written in snake case (`one`, `local_quorum`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
    /// Any node, including a hinted handoff
    Any,
    /// One replica
    #[default]
    One,
    /// A majority of replicas
    Quorum,
    /// A majority of replicas in the coordinator's data center
    LocalQuorum,
    /// A majority of replicas in every data center
    EachQuorum,
    /// Every replica
    All,
}

impl ConsistencyLevel {
    /// Protocol name of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistencyLevel::Any => "ANY",
            ConsistencyLevel::One => "ONE",
            ConsistencyLevel::Quorum => "QUORUM",
            ConsistencyLevel::LocalQuorum => "LOCAL_QUORUM",
            ConsistencyLevel::EachQuorum => "EACH_QUORUM",
            ConsistencyLevel::All => "ALL",
        }
    }
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsistencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ANY" => Ok(ConsistencyLevel::Any),
            "ONE" => Ok(ConsistencyLevel::One),
            "QUORUM" => Ok(ConsistencyLevel::Quorum),
            "LOCAL_QUORUM" => Ok(ConsistencyLevel::LocalQuorum),
            "EACH_QUORUM" => Ok(ConsistencyLevel::EachQuorum),
            "ALL" => Ok(ConsistencyLevel::All),
            other => Err(format!("Unknown consistency level '{}'", other)),
        }
    }
}
