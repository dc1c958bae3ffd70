//! Generation profiles loaded from YAML files.
//!
//! A profile captures a repeatable run: seed, row count, chunking and
//! corruption settings. Any omitted key takes its default, so a profile can
//! be as small as `count: 500`. CLI flags override profile values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for profile loading.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// Error reading the profile file
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Random seed (same seed = same data)
    pub seed: u64,
    /// Record sets to generate (clamped to the supported range at use)
    pub count: u64,
    /// Record sets per chunk file
    pub batch_size: u64,
    /// Per-field corruption probability, 0.0 disables
    pub dirty_rate: f64,
    /// Root directory for job folders
    pub out_dir: Option<PathBuf>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 1,
            batch_size: 1000,
            dirty_rate: 0.0,
            out_dir: None,
        }
    }
}

impl Profile {
    /// Parse a profile from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProfileError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a profile from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
