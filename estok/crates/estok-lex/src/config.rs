//! Scanner configuration.
//!
//! A [`ScanConfig`] fixes the two knobs a scan has: the edition profile and
//! the iteration cap. It can be built in code or read from TOML:
//!
//! ```toml
//! edition = 2016
//! iteration_limit = 5000000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edition::Edition;
use crate::error::ConfigError;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "estok.toml";

/// Default upper bound on scanner iterations.
///
/// Every iteration consumes at least one character, so this only trips when
/// a rule misbehaves or the input is longer than ten million characters.
pub const DEFAULT_ITERATION_LIMIT: usize = 10_000_000;

/// Configuration for one scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Edition profile gating the rule table.
    #[serde(default)]
    pub edition: Edition,

    /// Maximum number of rule-table iterations.
    #[serde(default = "default_iteration_limit")]
    pub iteration_limit: usize,
}

fn default_iteration_limit() -> usize {
    DEFAULT_ITERATION_LIMIT
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl ScanConfig {
    /// The default configuration: ES5, default iteration cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edition profile.
    pub fn with_edition(mut self, edition: impl Into<Edition>) -> Self {
        self.edition = edition.into();
        self
    }

    /// Sets the iteration cap.
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use estok_lex::{Edition, ScanConfig};
    ///
    /// let config = ScanConfig::from_toml_str("edition = 7").unwrap();
    /// assert_eq!(config.edition, Edition::ES2016);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading scan configuration");
        Self::from_toml_str(&text)
    }

    /// Rejects configurations that cannot scan anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iteration_limit == 0 {
            return Err(ConfigError::Invalid(
                "iteration_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
