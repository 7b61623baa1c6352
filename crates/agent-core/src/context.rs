//! Per-request execution context for agents
//!
//! `Context` is a small JSON key-value store that callers use to pass
//! rendering preferences and request metadata to an agent alongside the
//! prompt text.

use std::collections::HashMap;

/// Well-known context keys
pub mod keys {
    /// Response format preference (e.g. "markdown", "table", "json")
    pub const RESPONSE_FORMAT: &str = "response_format";
    /// Session ID for tracking
    pub const SESSION_ID: &str = "session_id";
    /// Name of the agent or user that issued the request
    pub const REQUESTED_BY: &str = "requested_by";
}

/// Context passed to agents during execution
///
/// # Example
///
/// ```
/// use agent_core::Context;
///
/// let ctx = Context::new()
///     .with_response_format("json")
///     .with_session_id("session-123");
///
/// assert_eq!(ctx.response_format(), Some("json"));
/// assert_eq!(ctx.session_id(), Some("session-123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    data: HashMap<String, serde_json::Value>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred response format
    pub fn with_response_format(mut self, format: impl Into<String>) -> Self {
        self.set_response_format(format);
        self
    }

    /// Set the session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.set_session_id(session_id);
        self
    }

    /// Record who issued the request
    pub fn with_requested_by(mut self, name: impl Into<String>) -> Self {
        self.insert(keys::REQUESTED_BY, serde_json::json!(name.into()));
        self
    }

    /// Preferred response format, if the caller set one
    pub fn response_format(&self) -> Option<&str> {
        self.get_str(keys::RESPONSE_FORMAT)
    }

    pub fn set_response_format(&mut self, format: impl Into<String>) {
        self.insert(keys::RESPONSE_FORMAT, serde_json::json!(format.into()));
    }

    pub fn session_id(&self) -> Option<&str> {
        self.get_str(keys::SESSION_ID)
    }

    pub fn set_session_id(&mut self, session_id: impl Into<String>) {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
    }

    pub fn requested_by(&self) -> Option<&str> {
        self.get_str(keys::REQUESTED_BY)
    }

    /// Insert a raw JSON value
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// Get a raw JSON value
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut ctx = Context::new();
        assert!(ctx.get("key").is_none());

        ctx.insert("key", serde_json::json!("value"));
        assert_eq!(ctx.get("key"), Some(&serde_json::json!("value")));

        ctx.insert("key", serde_json::json!("replaced"));
        assert_eq!(ctx.get("key"), Some(&serde_json::json!("replaced")));
    }

    #[test]
    fn test_builder_chain() {
        let ctx = Context::new()
            .with_response_format("table")
            .with_session_id("sess-1")
            .with_requested_by("finance-agent");

        assert_eq!(ctx.response_format(), Some("table"));
        assert_eq!(ctx.session_id(), Some("sess-1"));
        assert_eq!(ctx.requested_by(), Some("finance-agent"));
    }

    #[test]
    fn test_non_string_format_is_ignored() {
        let mut ctx = Context::new();
        ctx.insert(keys::RESPONSE_FORMAT, serde_json::json!(3));
        assert_eq!(ctx.response_format(), None);
    }
}
