//! Tool trait definition

use agent_core::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Each tool provides a name, a description and a JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description tells the caller when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "symbol": { "type": "string" },
    ///         "growth_percent": { "type": "number" }
    ///     },
    ///     "required": ["symbol", "growth_percent"]
    /// });
    /// ```
    fn input_schema(&self) -> Value;

    /// Build the serializable definition of this tool
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Name, description and schema of a tool, as handed to an agent executor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
