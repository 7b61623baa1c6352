//! Error types for agent-core

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool operations
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Agent initialization failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// Caller supplied input the agent or tool cannot interpret
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No tool registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("missing field `symbol`".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing field `symbol`");

        let err = Error::ToolNotFound("web_search".to_string());
        assert_eq!(err.to_string(), "Tool not found: web_search");

        let err = Error::Generic("plain".to_string());
        assert_eq!(err.to_string(), "plain");
    }
}
