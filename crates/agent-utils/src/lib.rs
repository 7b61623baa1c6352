//! Shared utilities for agent-rs
//!
//! This crate provides common functionality used across the agent-rs workspace:
//! process-level configuration and tracing setup.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogFormat};
pub use logging::{init_tracing, init_tracing_with};
