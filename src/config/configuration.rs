use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// What the splitter does with a char that is neither a letter nor a decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidCharPolicy {
    /// fail with `SplitError::InvalidChar`
    #[default]
    Reject,
    /// no segmentation exists
    Infeasible,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// cache suffix results per position
    pub memoize: bool,
    /// feasibility answers true when a scan runs out without a verdict
    pub lenient_feasibility: bool,
    pub invalid_char_policy: InvalidCharPolicy,
    /// longest input in chars the splitter accepts. The search recurses once
    /// per token, so unbounded input may exhaust the thread's stack
    pub max_input_length: Option<usize>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            memoize: true,
            lenient_feasibility: false,
            invalid_char_policy: InvalidCharPolicy::Reject,
            max_input_length: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SplitConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // an empty document means all defaults
        if yaml.trim().is_empty() {
            return Ok(SplitConfig::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
