//! Scenario tools for agents

pub mod scenario;

pub use scenario::ScenarioSimulatorTool;
