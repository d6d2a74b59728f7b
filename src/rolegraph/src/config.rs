//! Role graph configuration loading and validation

use crate::error::{Result, RoleGraphError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of roles a single inheritance path may span
pub const DEFAULT_MAX_HIERARCHY_LEVEL: usize = 10;

/// Role graph configuration
///
/// ```toml
/// max_hierarchy_level = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoleGraphConfig {
    /// Maximum number of roles on an inheritance path, start included.
    /// A path may therefore use at most `max_hierarchy_level - 1` edges.
    #[serde(default = "default_max_hierarchy_level")]
    pub max_hierarchy_level: usize,
}

fn default_max_hierarchy_level() -> usize { DEFAULT_MAX_HIERARCHY_LEVEL }

impl Default for RoleGraphConfig {
    fn default() -> Self {
        Self {
            max_hierarchy_level: default_max_hierarchy_level(),
        }
    }
}

impl RoleGraphConfig {
    /// Configuration with an explicit hierarchy level
    pub fn new(max_hierarchy_level: usize) -> Self {
        Self { max_hierarchy_level }
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RoleGraphConfig = toml::from_str(contents)
            .map_err(|e| RoleGraphError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_hierarchy_level == 0 {
            return Err(RoleGraphError::Config(
                "max_hierarchy_level must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
