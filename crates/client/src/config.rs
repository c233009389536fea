//! Client configuration via `colbatch.toml`
//!
//! Holds the consistency levels used when callers do not pass one
//! explicitly. Everything has a default, so an empty file is valid.

use colbatch_core::{ConsistencyLevel, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "colbatch.toml";

/// Client configuration loaded from `colbatch.toml`.
///
/// # Example
///
/// ```toml
/// default_consistency = "quorum"
/// deletion_consistency = "all"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Level used by `Mutator::execute_default`
    #[serde(default)]
    pub default_consistency: ConsistencyLevel,
    /// Level used by `RowDeletor::delete_row_default`; falls back to
    /// `default_consistency`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_consistency: Option<ConsistencyLevel>,
}

impl ClientConfig {
    /// Consistency level for row deletions
    pub fn deletion_consistency(&self) -> ConsistencyLevel {
        self.deletion_consistency
            .unwrap_or(self.default_consistency)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# colbatch client configuration
#
# Consistency level for batches executed without an explicit level.
# One of: "any", "one", "quorum", "local_quorum", "each_quorum", "all"
default_consistency = "one"

# Consistency level for row deletions (defaults to default_consistency)
# deletion_consistency = "quorum"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML or names an
    /// unknown consistency level.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }
}
