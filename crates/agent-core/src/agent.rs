//! Core Agent trait definition

use crate::{Context, Result};
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent receives a text prompt and produces a text (usually markdown)
/// response. Anything the agent needs besides the prompt travels in the
/// [`Context`].
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process input and return output
    async fn process(&self, input: String, context: &mut Context) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;

    /// Short description of what the agent is for
    fn role(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoAgent;

    #[async_trait]
    impl Agent for EchoAgent {
        async fn process(&self, input: String, context: &mut Context) -> Result<String> {
            context.set_session_id("echo-session");
            Ok(input.to_uppercase())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_agent_as_trait_object() {
        let agent: Box<dyn Agent> = Box::new(EchoAgent);
        let mut ctx = Context::new();

        let output = agent.process("hello".to_string(), &mut ctx).await.unwrap();
        assert_eq!(output, "HELLO");
        assert_eq!(agent.name(), "echo");
        assert_eq!(agent.role(), "");
        assert_eq!(ctx.session_id(), Some("echo-session"));
    }
}
