//! Tool management and execution framework for agent-rs
//!
//! A tool is a named, described capability an agent can invoke with JSON
//! parameters. Tools are collected in a [`ToolRegistry`] so that an
//! orchestrator can list them and dispatch calls by name.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::{Tool, ToolDefinition};
