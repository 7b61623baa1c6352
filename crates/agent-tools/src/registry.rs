//! Tool registry for managing available tools

use crate::{Tool, ToolDefinition};
use agent_core::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Registry for managing tools
///
/// The map is only ever replaced entry by entry, so a poisoned lock still
/// holds a consistent map and is recovered rather than propagated.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<dyn Tool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, returning the tool previously registered under the
    /// same name, if any
    pub fn register(&self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        let name = tool.name().to_string();
        tracing::debug!(tool = %name, "Registering tool");
        tools.insert(name, tool)
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.get(name).cloned()
    }

    /// List all registered tools
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.values().cloned().collect()
    }

    /// Definitions of all registered tools, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.list_tools().iter().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute the tool registered under `name`
    pub async fn execute(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| Error::ToolNotFound(name.to_string()))?;
        tracing::debug!(tool = %name, "Executing tool");
        tool.execute(params).await
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct ConstantTool {
        name: &'static str,
        answer: i64,
    }

    #[async_trait]
    impl Tool for ConstantTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            Ok(json!({ "answer": self.answer }))
        }

        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Always returns the same answer"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object", "properties": {} })
        }
    }

    fn constant(name: &'static str, answer: i64) -> Arc<dyn Tool> {
        Arc::new(ConstantTool { name, answer })
    }

    #[test]
    fn test_register_and_get() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register(constant("forty_two", 42)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("forty_two").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_replaces_same_name() {
        let registry = ToolRegistry::new();
        registry.register(constant("answer", 1));
        let previous = registry.register(constant("answer", 2));

        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);

        let output = tokio_test::block_on(registry.execute("answer", json!({}))).unwrap();
        assert_eq!(output, json!({ "answer": 2 }));
    }

    #[test]
    fn test_definitions_sorted() {
        let registry = ToolRegistry::new();
        registry.register(constant("zeta", 0));
        registry.register(constant("alpha", 0));

        let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn test_execute_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = tokio_test::block_on(registry.execute("nope", json!({}))).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(name) if name == "nope"));
    }
}
