//! What-if financial scenario simulation
//!
//! This crate answers questions like *"What if Tesla's revenue grows 15% next
//! year?"*. It contains:
//!
//! - A baseline table of current revenue, EPS and P/E per ticker
//! - A pure calculator projecting those figures from a growth percentage,
//!   holding the share price constant
//! - An intent extractor recognizing the ticker and percentage in free text
//! - A [`ScenarioSimulatorTool`] and a [`ScenarioAgent`] exposing the
//!   simulator to agent executors
//!
//! # Example
//!
//! ```
//! use agent_scenario::{BaselineTable, ScenarioSimulator};
//! use std::sync::Arc;
//!
//! let simulator = ScenarioSimulator::new(Arc::new(BaselineTable::sample()))?;
//!
//! let result = simulator
//!     .run("What if Tesla's revenue grows 15% next year?")
//!     .expect("scenario request")?;
//!
//! assert_eq!(result.symbol, "TSLA");
//! assert_eq!(result.projected_pe, 52.17);
//! # Ok::<(), agent_scenario::ScenarioError>(())
//! ```

pub mod agent;
pub mod baseline;
pub mod calculator;
pub mod config;
pub mod error;
pub mod formatter;
pub mod intent;
pub mod simulator;
pub mod tools;

pub use agent::ScenarioAgent;
pub use baseline::{BaselineFinancials, BaselineSource, BaselineTable};
pub use calculator::{MetricRow, ScenarioCalculator, ScenarioResult};
pub use config::ScenarioConfig;
pub use error::{Result, ScenarioError};
pub use formatter::ResponseFormat;
pub use intent::{IntentExtractor, ScenarioIntent};
pub use simulator::ScenarioSimulator;
pub use tools::ScenarioSimulatorTool;
