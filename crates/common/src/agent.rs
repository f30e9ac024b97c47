//! The core agent abstraction.
//!
//! Every specialist agent implements [`Agent`] and embeds an [`AgentCore`]
//! carrying its identity, lifecycle state, and error log. The trait supplies
//! the lifecycle plumbing (state transitions, status snapshots, error
//! capture) so concrete agents only implement their domain dispatch.

use crate::capability::Capability;
use crate::error::Result;
use crate::task::Task;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

/// Maximum retained error-log entries per agent. The oldest entry is
/// evicted once the log is full.
pub const ERROR_LOG_CAPACITY: usize = 100;

/// Lifecycle state of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AgentState {
    Idle = 0,
    Active = 1,
    Processing = 2,
    Error = 3,
    Recovering = 4,
    Shutdown = 5,
}

impl AgentState {
    fn from_u8(value: u8) -> AgentState {
        match value {
            1 => AgentState::Active,
            2 => AgentState::Processing,
            3 => AgentState::Error,
            4 => AgentState::Recovering,
            5 => AgentState::Shutdown,
            _ => AgentState::Idle,
        }
    }
}

/// Immutable identity and descriptive attributes of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMetadata {
    pub agent_id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub capabilities: Vec<Capability>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One captured execution error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub timestamp: DateTime<Utc>,
    pub error: String,
    pub context: serde_json::Value,
}

/// Read-only status snapshot of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStatus {
    pub agent_id: String,
    pub name: String,
    pub state: AgentState,
    pub capabilities: Vec<Capability>,
    pub error_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Shared identity, lifecycle state, and error log embedded by every agent.
///
/// State and log use interior mutability: agents are invoked through shared
/// references from the supervisor, and the runtime schedules them across
/// threads.
pub struct AgentCore {
    metadata: AgentMetadata,
    state: AtomicU8,
    error_log: Mutex<VecDeque<ErrorEntry>>,
}

impl AgentCore {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        capabilities: Vec<Capability>,
    ) -> Self {
        let now = Utc::now();
        Self {
            metadata: AgentMetadata {
                agent_id: uuid::Uuid::new_v4().to_string(),
                name: name.into(),
                description: description.into(),
                version: "0.1.0".to_string(),
                capabilities,
                created_at: now,
                updated_at: now,
            },
            state: AtomicU8::new(AgentState::Idle as u8),
            error_log: Mutex::new(VecDeque::new()),
        }
    }

    /// Replace the generated id with a fixed one.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.metadata.agent_id = agent_id.into();
        self
    }

    pub fn metadata(&self) -> &AgentMetadata {
        &self.metadata
    }

    pub fn state(&self) -> AgentState {
        AgentState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn set_state(&self, state: AgentState) {
        self.state.store(state as u8, Ordering::SeqCst);
    }

    /// Append to the error log, evicting the oldest entry once the log is
    /// at capacity. Never fails.
    pub fn log_error(&self, error: impl Into<String>, context: serde_json::Value) {
        let mut log = self
            .error_log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if log.len() == ERROR_LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(ErrorEntry {
            timestamp: Utc::now(),
            error: error.into(),
            context,
        });
    }

    pub fn error_count(&self) -> usize {
        self.error_log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            agent_id: self.metadata.agent_id.clone(),
            name: self.metadata.name.clone(),
            state: self.state(),
            capabilities: self.metadata.capabilities.clone(),
            error_count: self.error_count(),
            created_at: self.metadata.created_at,
        }
    }
}

/// The contract every specialist agent satisfies.
#[async_trait]
pub trait Agent: Send + Sync {
    /// The agent's embedded identity and lifecycle state.
    fn core(&self) -> &AgentCore;

    /// Domain-specific task handling. Implementations dispatch on the task's
    /// action and return a result payload, or fail with a descriptive
    /// `OverseerError::Agent`.
    async fn handle_task(&self, task: &Task) -> Result<serde_json::Value>;

    /// Optional pre-check of task payloads.
    async fn validate_input(&self, _input: &serde_json::Value) -> bool {
        true
    }

    fn agent_id(&self) -> &str {
        &self.core().metadata().agent_id
    }

    fn name(&self) -> &str {
        &self.core().metadata().name
    }

    fn capabilities(&self) -> &[Capability] {
        &self.core().metadata().capabilities
    }

    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    fn state(&self) -> AgentState {
        self.core().state()
    }

    async fn initialize(&self) -> Result<()> {
        self.core().set_state(AgentState::Active);
        Ok(())
    }

    /// Terminal: no further `execute` calls are expected afterward.
    async fn shutdown(&self) -> Result<()> {
        self.core().set_state(AgentState::Shutdown);
        Ok(())
    }

    /// Execute a task, driving the lifecycle state machine around the
    /// domain handler.
    ///
    /// Transitions: `Processing` on entry, back to `Active` on success,
    /// `Error` on failure (with the failure captured in the error log). An
    /// agent left in `Error` by a previous call recovers on the next one,
    /// passing through `Recovering` and `Active` before processing.
    async fn execute(&self, task: &Task) -> Result<serde_json::Value> {
        let core = self.core();
        if core.state() == AgentState::Error {
            core.set_state(AgentState::Recovering);
            core.set_state(AgentState::Active);
        }
        core.set_state(AgentState::Processing);
        match self.handle_task(task).await {
            Ok(result) => {
                core.set_state(AgentState::Active);
                Ok(result)
            }
            Err(err) => {
                core.log_error(err.to_string(), json!({ "action": task.action }));
                core.set_state(AgentState::Error);
                Err(err)
            }
        }
    }

    /// Read-only status snapshot: identity, state, capabilities, error count.
    fn status(&self) -> AgentStatus {
        self.core().status()
    }
}
