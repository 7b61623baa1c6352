//! Error types for scenario simulation

use thiserror::Error;

/// Scenario simulation errors
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// No baseline financials exist for the requested symbol
    #[error("Sorry, no financial data available for symbol {symbol}.")]
    SymbolNotFound { symbol: String },

    /// Projected EPS is zero, so the projected P/E has no value
    #[error(
        "Projected P/E for {symbol} is undefined at {growth_percent}% growth (projected EPS is zero)"
    )]
    DivisionUndefined { symbol: String, growth_percent: f64 },

    /// Projected figures overflow to infinity
    #[error("Projection for {symbol} at {growth_percent}% growth is out of range")]
    ProjectionOutOfRange { symbol: String, growth_percent: f64 },

    /// Growth percentage is NaN or infinite
    #[error("Invalid growth percentage: {0}")]
    InvalidGrowth(f64),

    /// Baseline table failed validation
    #[error("Invalid baseline data: {0}")]
    InvalidBaseline(String),

    /// Tool parameters could not be interpreted
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading a baseline file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScenarioError {
    /// Whether this error is an expected outcome of a well-formed request
    /// (unknown symbol, undefined or unrepresentable projection) rather than
    /// a caller or setup fault
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound { .. }
                | Self::DivisionUndefined { .. }
                | Self::ProjectionOutOfRange { .. }
        )
    }
}

/// Result type alias for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;

impl From<ScenarioError> for agent_core::Error {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::InvalidParameters(msg) => agent_core::Error::InvalidInput(msg),
            ScenarioError::InvalidBaseline(_) | ScenarioError::ConfigError(_) => {
                agent_core::Error::InitializationFailed(err.to_string())
            }
            other => agent_core::Error::ProcessingFailed(other.to_string()),
        }
    }
}

impl From<agent_core::Error> for ScenarioError {
    fn from(err: agent_core::Error) -> Self {
        match err {
            agent_core::Error::InvalidInput(msg) => ScenarioError::InvalidParameters(msg),
            other => ScenarioError::ConfigError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScenarioError::SymbolNotFound {
            symbol: "XXXX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sorry, no financial data available for symbol XXXX."
        );

        let err = ScenarioError::DivisionUndefined {
            symbol: "MSFT".to_string(),
            growth_percent: -100.0,
        };
        assert!(err.to_string().contains("MSFT"));
        assert!(err.to_string().contains("-100%"));
    }

    #[test]
    fn test_is_outcome() {
        assert!(
            ScenarioError::SymbolNotFound {
                symbol: "X".to_string()
            }
            .is_outcome()
        );
        assert!(
            ScenarioError::ProjectionOutOfRange {
                symbol: "TSLA".to_string(),
                growth_percent: 1e308,
            }
            .is_outcome()
        );
        assert!(!ScenarioError::InvalidGrowth(f64::NAN).is_outcome());
        assert!(!ScenarioError::InvalidBaseline("dup".to_string()).is_outcome());
    }

    #[test]
    fn test_error_conversion() {
        let err: agent_core::Error = ScenarioError::InvalidParameters("bad".to_string()).into();
        assert!(matches!(err, agent_core::Error::InvalidInput(msg) if msg == "bad"));

        let err: agent_core::Error = ScenarioError::InvalidBaseline("dup".to_string()).into();
        assert!(matches!(err, agent_core::Error::InitializationFailed(_)));

        let err: agent_core::Error = ScenarioError::InvalidGrowth(f64::INFINITY).into();
        match err {
            agent_core::Error::ProcessingFailed(msg) => assert!(msg.contains("growth")),
            other => panic!("Expected ProcessingFailed, got {other:?}"),
        }
    }
}
