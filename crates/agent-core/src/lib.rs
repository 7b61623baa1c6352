//! Core abstractions for agent-rs
//!
//! This crate defines the traits and types shared by every agent in the
//! workspace: the [`Agent`] trait, the per-request [`Context`], and the
//! common [`Error`] type.

pub mod agent;
pub mod context;
pub mod error;

pub use agent::Agent;
pub use context::Context;
pub use error::{Error, Result};
