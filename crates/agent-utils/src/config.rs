//! Process-level configuration shared by the binaries

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown log output format
    #[error("Unknown log format '{0}' (expected 'pretty' or 'json')")]
    UnknownLogFormat(String),
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (development, production, ...)
    pub environment: String,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "agent-rs".to_string(),
            environment: "development".to_string(),
            log_filter: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Set the application name
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the default log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load overrides from `AGENT_ENV`, `AGENT_LOG` and `AGENT_LOG_FORMAT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn merge_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("AGENT_ENV") {
            self.environment = env;
        }
        if let Some(filter) = lookup("AGENT_LOG") {
            self.log_filter = filter;
        }
        if let Some(format) = lookup("AGENT_LOG_FORMAT") {
            self.log_format = format.parse()?;
        }
        Ok(self)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_name, "agent-rs");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_merge_lookup() {
        let vars: HashMap<&str, &str> = [
            ("AGENT_ENV", "production"),
            ("AGENT_LOG", "debug,agent_scenario=trace"),
            ("AGENT_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .merge_lookup(|k| vars.get(k).map(|v| (*v).to_string()))
            .unwrap();

        assert!(config.is_production());
        assert_eq!(config.log_filter, "debug,agent_scenario=trace");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_log_format() {
        let err = Config::default()
            .merge_lookup(|k| (k == "AGENT_LOG_FORMAT").then(|| "xml".to_string()))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownLogFormat("xml".to_string()));
    }
}
