//! Search configuration for erdos
//!
//! Configuration lives in a TOML file passed with `--config`. Every field is
//! optional; command-line flags override file values.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::SearchConfig;

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Reject values the search cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.default_cost.is_finite() || self.default_cost < 0.0 {
            bail_invalid!("default_cost", self.default_cost);
        }
        if self.max_paths == Some(0) {
            bail_invalid!("max_paths", 0);
        }
        Ok(())
    }

    /// Apply a command-line `--max-paths` override
    pub fn with_max_paths(mut self, max_paths: Option<usize>) -> Result<Self> {
        if max_paths.is_some() {
            self.max_paths = max_paths;
        }
        self.validate()?;
        Ok(self)
    }
}
