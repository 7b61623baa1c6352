//! Agent answering what-if scenario questions

use agent_core::{Agent, Context, Result};
use agent_tools::ToolRegistry;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ScenarioConfig;
use crate::formatter::{Formatter, ResponseFormat};
use crate::simulator::ScenarioSimulator;
use crate::tools::ScenarioSimulatorTool;

/// Agent that recognizes scenario requests and renders their projections
///
/// The response format comes from the request [`Context`] when it names a
/// known format, otherwise from the agent's default.
pub struct ScenarioAgent {
    simulator: Arc<ScenarioSimulator>,
    default_format: ResponseFormat,
    name: String,
}

impl ScenarioAgent {
    pub fn new(simulator: Arc<ScenarioSimulator>) -> Self {
        Self {
            simulator,
            default_format: ResponseFormat::default(),
            name: "scenario-simulator".to_string(),
        }
    }

    /// Build the simulator and agent from configuration
    pub fn from_config(config: &ScenarioConfig) -> crate::Result<Self> {
        let simulator = ScenarioSimulator::from_config(config)?;
        Ok(Self::new(Arc::new(simulator)).with_default_format(config.default_format))
    }

    pub fn with_default_format(mut self, format: ResponseFormat) -> Self {
        self.default_format = format;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn simulator(&self) -> &Arc<ScenarioSimulator> {
        &self.simulator
    }

    /// Register the scenario tool, sharing this agent's simulator
    pub fn register_tools(&self, registry: &ToolRegistry) {
        registry.register(Arc::new(ScenarioSimulatorTool::new(Arc::clone(
            &self.simulator,
        ))));
    }

    fn formatter_for(&self, context: &Context) -> Box<dyn Formatter> {
        let format = match context.response_format().map(str::parse::<ResponseFormat>) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::warn!("Ignoring requested format: {e}");
                self.default_format
            }
            None => self.default_format,
        };
        format.formatter()
    }

    /// Render the scenario in `input`, or `None` when it is not a scenario
    /// request and the caller should try something else
    pub fn try_process(&self, input: &str, context: &Context) -> Option<String> {
        let outcome = self.simulator.run(input)?;
        let formatter = self.formatter_for(context);

        Some(match outcome {
            Ok(result) => formatter.format_result(&result),
            Err(err) if err.is_outcome() => formatter.format_error(&err),
            Err(err) => {
                tracing::error!("Scenario simulation failed: {err}");
                formatter.format_error(&err)
            }
        })
    }
}

#[async_trait]
impl Agent for ScenarioAgent {
    async fn process(&self, input: String, context: &mut Context) -> Result<String> {
        if let Some(response) = self.try_process(&input, context) {
            return Ok(response);
        }

        Ok(self
            .formatter_for(context)
            .format_no_intent(&self.simulator.symbols()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> &str {
        "Run what-if revenue growth scenarios and project EPS and P/E"
    }
}
