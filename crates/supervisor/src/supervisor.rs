//! Core supervisor implementation: lifecycle sweep and task delegation.

use crate::registry::{AgentRegistry, RegistryStatus};
use overseer_common::{Agent, Capability, DelegationOutcome, OverseerError, Result, Task};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Supervisor summary: name, running flag, and full registry status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupervisorStatus {
    pub supervisor: String,
    pub running: bool,
    pub registry: RegistryStatus,
}

/// The supervisor owns the registry and implements the delegation protocol:
/// read the task's capability selector, pick the first agent offering it,
/// invoke the agent, and wrap whatever happens in a [`DelegationOutcome`].
pub struct Supervisor {
    name: String,
    registry: AgentRegistry,
    running: bool,
}

impl Supervisor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registry: AgentRegistry::new(),
            running: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn register_agent(&mut self, agent: Arc<dyn Agent>) {
        self.registry.register(agent);
    }

    /// Initialize every registered agent, sequentially. The first failure
    /// aborts the sweep and propagates.
    pub async fn initialize_agents(&self) -> Result<()> {
        let agents = self.registry.list_all_agents();
        for agent in &agents {
            agent.initialize().await?;
        }
        info!(count = agents.len(), "Initialized agents");
        Ok(())
    }

    /// Shut down every registered agent, sequentially. Symmetric to
    /// [`Supervisor::initialize_agents`], including the abort-on-failure
    /// behavior.
    pub async fn shutdown_agents(&self) -> Result<()> {
        let agents = self.registry.list_all_agents();
        for agent in &agents {
            agent.shutdown().await?;
        }
        info!(count = agents.len(), "Shut down agents");
        Ok(())
    }

    /// Delegate a task to the first agent offering its capability.
    ///
    /// A task without a capability selector is rejected with
    /// [`OverseerError::MissingCapability`]. Every other outcome comes back
    /// as an envelope: agent failures are captured here, never propagated.
    pub async fn delegate_task(&self, task: &Task) -> Result<DelegationOutcome> {
        let selector = task
            .capability
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(OverseerError::MissingCapability)?;

        // An unrecognized tag behaves exactly like a capability nobody
        // offers: a structured miss, not an error.
        let Ok(capability) = selector.parse::<Capability>() else {
            return Ok(DelegationOutcome::no_agents(selector));
        };

        let agents = self.registry.get_agents_by_capability(capability);
        let Some(agent) = agents.first() else {
            return Ok(DelegationOutcome::no_agents(selector));
        };

        info!(agent = %agent.name(), capability = %capability, "Delegating task");
        match agent.execute(task).await {
            Ok(result) => Ok(DelegationOutcome::completed(
                agent.agent_id(),
                agent.name(),
                result,
            )),
            Err(err) => {
                error!(agent_id = %agent.agent_id(), error = %err, "Task execution failed");
                Ok(DelegationOutcome::failed(agent.agent_id(), err.to_string()))
            }
        }
    }

    /// Mark the supervisor running and initialize the fleet.
    pub async fn start(&mut self) -> Result<()> {
        self.running = true;
        self.initialize_agents().await?;
        info!(supervisor = %self.name, "Supervisor started");
        Ok(())
    }

    /// Mark the supervisor stopped and shut the fleet down.
    pub async fn stop(&mut self) -> Result<()> {
        self.running = false;
        self.shutdown_agents().await?;
        info!(supervisor = %self.name, "Supervisor stopped");
        Ok(())
    }

    pub fn status(&self) -> SupervisorStatus {
        SupervisorStatus {
            supervisor: self.name.clone(),
            running: self.running,
            registry: self.registry.status(),
        }
    }
}
