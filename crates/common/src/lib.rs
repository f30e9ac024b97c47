//! Common types and traits shared across Overseer crates.
//!
//! This crate provides the foundational abstractions the supervisor and the
//! specialist agents use to communicate: the capability vocabulary, the
//! `Agent` trait with its lifecycle state machine, and the task/envelope
//! types flowing through delegation.

pub mod agent;
pub mod capability;
pub mod error;
pub mod task;

pub use agent::{Agent, AgentCore, AgentMetadata, AgentState, AgentStatus, ErrorEntry};
pub use capability::{Capability, UnknownCapability};
pub use error::{OverseerError, Result};
pub use task::{DelegationOutcome, Task};
