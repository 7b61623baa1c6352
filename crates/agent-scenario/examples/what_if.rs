//! What-if scenario example
//!
//! Runs a natural-language scenario question through the scenario agent and
//! then calls the same simulator through the tool registry, the way an
//! agent executor would.
//!
//! To run this example:
//! ```bash
//! # Optional: point at your own baseline figures
//! export SCENARIO_BASELINE_PATH=./baseline.json
//!
//! cargo run -p agent-scenario --example what_if "What if Apple's revenue grows 8%?"
//! ```

use agent_core::{Agent, Context};
use agent_scenario::{ScenarioAgent, ScenarioConfig};
use agent_tools::ToolRegistry;
use serde_json::json;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agent_utils::init_tracing_with(
        &agent_utils::Config::default().with_log_filter("info,agent_scenario=debug"),
    );

    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "What if Tesla's revenue grows 15% next year?".to_string());

    let config = ScenarioConfig::default().with_env()?;
    let agent = ScenarioAgent::from_config(&config)?;

    println!("=== Scenario Agent ===\n");
    println!("Query: {query}\n");

    let mut context = Context::new().with_session_id("example");
    let response = agent.process(query.clone(), &mut context).await?;
    println!("{response}\n");

    println!("=== Tool Call ===\n");
    let registry = ToolRegistry::new();
    agent.register_tools(&registry);

    for def in registry.definitions() {
        println!("Tool: {} - {}", def.name, def.description);
    }

    let output = registry
        .execute("scenario_simulator", json!({ "query": query }))
        .await?;
    println!("\n{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
