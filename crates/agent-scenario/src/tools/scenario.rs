//! Tool exposing the scenario simulator to agents

use agent_core::Result as AgentResult;
use agent_tools::Tool;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::calculator::ScenarioResult;
use crate::error::{Result, ScenarioError};
use crate::simulator::ScenarioSimulator;

/// Tool for what-if revenue growth scenarios
pub struct ScenarioSimulatorTool {
    simulator: Arc<ScenarioSimulator>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScenarioParams {
    Direct {
        symbol: String,
        growth_percent: f64,
    },
    Query {
        query: String,
    },
}

impl ScenarioSimulatorTool {
    pub fn new(simulator: Arc<ScenarioSimulator>) -> Self {
        Self { simulator }
    }

    fn run(&self, params: ScenarioParams) -> Value {
        let outcome = match params {
            ScenarioParams::Direct {
                symbol,
                growth_percent,
            } => self.simulator.simulate(&symbol, growth_percent),
            ScenarioParams::Query { query } => match self.simulator.run(&query) {
                Some(outcome) => outcome,
                None => {
                    return json!({
                        "status": "no_action",
                        "summary": null,
                        "table": null,
                    });
                }
            },
        };

        match outcome {
            Ok(result) => success(&result),
            Err(err) => failure(&err),
        }
    }

    fn parse_params(params: Value) -> Result<ScenarioParams> {
        serde_json::from_value(params).map_err(|_| {
            ScenarioError::InvalidParameters(
                "expected {\"query\": string} or {\"symbol\": string, \"growth_percent\": number}"
                    .to_string(),
            )
        })
    }
}

fn success(result: &ScenarioResult) -> Value {
    json!({
        "status": "ok",
        "summary": result.summary(),
        "table": result.rows(),
        "result": result,
    })
}

fn failure(err: &ScenarioError) -> Value {
    let status = match err {
        ScenarioError::SymbolNotFound { .. } => "not_found",
        ScenarioError::DivisionUndefined { .. } => "undefined",
        ScenarioError::ProjectionOutOfRange { .. } => "out_of_range",
        _ => "error",
    };
    json!({
        "status": status,
        "summary": err.to_string(),
        "table": null,
    })
}

#[async_trait]
impl Tool for ScenarioSimulatorTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params = Self::parse_params(params)?;
        Ok(self.run(params))
    }

    fn name(&self) -> &str {
        "scenario_simulator"
    }

    fn description(&self) -> &str {
        "Simulate what-if revenue growth scenarios for a stock. \
         Projects revenue, EPS and P/E from a growth percentage, holding the share price constant. \
         Pass either a natural-language 'query' such as \"What if Tesla's revenue grows 15%?\" \
         or an explicit 'symbol' and 'growth_percent'."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text what-if question"
                },
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g. TSLA)"
                },
                "growth_percent": {
                    "type": "number",
                    "description": "Revenue growth in percent, negative for a decline"
                }
            },
            "oneOf": [
                { "required": ["query"] },
                { "required": ["symbol", "growth_percent"] }
            ]
        })
    }
}
