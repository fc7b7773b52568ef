//! Ignore-list configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SuppressionConfig {
    /// JSON ignore list: `{library: {component: [rule, ...]}}`.
    pub ignore_file: Option<PathBuf>,
}
