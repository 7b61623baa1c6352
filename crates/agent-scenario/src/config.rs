//! Configuration for scenario simulation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::baseline::BaselineTable;
use crate::error::{Result, ScenarioError};
use crate::formatter::ResponseFormat;

/// Environment variable naming a JSON baseline file
pub const ENV_BASELINE_PATH: &str = "SCENARIO_BASELINE_PATH";
/// Environment variable selecting the default response format
pub const ENV_FORMAT: &str = "SCENARIO_FORMAT";

/// Configuration for scenario simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// JSON baseline file; the built-in sample table is used when unset
    pub baseline_path: Option<PathBuf>,

    /// Format used when the request context does not ask for one
    pub default_format: ResponseFormat,

    /// Extra company name -> ticker mappings for intent extraction
    pub aliases: Vec<(String, String)>,
}

impl ScenarioConfig {
    /// Create a new configuration builder
    pub fn builder() -> ScenarioConfigBuilder {
        ScenarioConfigBuilder::default()
    }

    /// Apply overrides from `SCENARIO_BASELINE_PATH` and `SCENARIO_FORMAT`
    pub fn with_env(self) -> Result<Self> {
        self.merge_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn merge_lookup<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_BASELINE_PATH).filter(|p| !p.trim().is_empty()) {
            self.baseline_path = Some(PathBuf::from(path));
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.default_format = format.parse()?;
        }
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.baseline_path {
            if !path.is_file() {
                return Err(ScenarioError::ConfigError(format!(
                    "baseline file {} does not exist",
                    path.display()
                )));
            }
        }

        for (name, ticker) in &self.aliases {
            let ticker = ticker.trim();
            let valid = (1..=5).contains(&ticker.len())
                && ticker.chars().all(|c| c.is_ascii_alphabetic());
            if !valid {
                return Err(ScenarioError::ConfigError(format!(
                    "alias '{name}' maps to invalid ticker '{ticker}'"
                )));
            }
        }

        Ok(())
    }

    /// Baseline table this configuration points at
    pub fn load_baseline(&self) -> Result<BaselineTable> {
        match &self.baseline_path {
            Some(path) => BaselineTable::from_json_file(path),
            None => Ok(BaselineTable::sample()),
        }
    }
}

/// Builder for ScenarioConfig
#[derive(Debug, Default)]
pub struct ScenarioConfigBuilder {
    baseline_path: Option<PathBuf>,
    default_format: Option<ResponseFormat>,
    aliases: Vec<(String, String)>,
}

impl ScenarioConfigBuilder {
    /// Load baselines from a JSON file
    pub fn baseline_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.baseline_path = Some(path.into());
        self
    }

    /// Set the default response format
    pub fn default_format(mut self, format: ResponseFormat) -> Self {
        self.default_format = Some(format);
        self
    }

    /// Add a company name -> ticker mapping
    pub fn alias(mut self, name: impl Into<String>, ticker: impl Into<String>) -> Self {
        self.aliases.push((name.into(), ticker.into()));
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ScenarioConfig> {
        let config = ScenarioConfig {
            baseline_path: self.baseline_path,
            default_format: self.default_format.unwrap_or_default(),
            aliases: self.aliases,
        };

        config.validate()?;
        Ok(config)
    }
}
