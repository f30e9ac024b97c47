//! In-memory registry of capability-tagged agents.

use overseer_common::{Agent, AgentStatus, Capability};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{info, warn};

/// Registry summary: totals, per-capability counts, and per-agent snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStatus {
    pub total_agents: usize,
    pub agents_by_capability: BTreeMap<String, usize>,
    pub agent_details: Vec<AgentStatus>,
}

/// Index structure mapping identifiers and capabilities to agents.
///
/// Two indexes are kept in step: a primary map from agent id to the agent,
/// and a secondary map from capability to the ids offering it, in
/// registration order. All mutation happens through `&mut self`, so both
/// indexes update inside one critical section; reads still filter ids that
/// have no primary entry rather than fail on them.
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn Agent>>,
    agents_by_capability: HashMap<Capability, Vec<String>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        let mut agents_by_capability = HashMap::new();
        for capability in Capability::ALL {
            agents_by_capability.insert(capability, Vec::new());
        }
        Self {
            agents: HashMap::new(),
            agents_by_capability,
        }
    }

    /// Register an agent under its id and every capability it declares.
    ///
    /// Re-registering an existing id is last-write-wins: the previous agent
    /// is replaced, with a warning.
    pub fn register(&mut self, agent: Arc<dyn Agent>) {
        let agent_id = agent.agent_id().to_string();
        if self.agents.contains_key(&agent_id) {
            warn!(agent_id = %agent_id, "Agent already registered, overwriting");
        }

        for capability in agent.capabilities() {
            let bucket = self.agents_by_capability.entry(*capability).or_default();
            if !bucket.contains(&agent_id) {
                bucket.push(agent_id.clone());
            }
        }

        info!(agent = %agent.name(), agent_id = %agent_id, "Registered agent");
        self.agents.insert(agent_id, agent);
    }

    /// Remove an agent from both indexes. Returns false when the id was
    /// never registered (a no-op, not an error).
    pub fn unregister(&mut self, agent_id: &str) -> bool {
        let Some(agent) = self.agents.remove(agent_id) else {
            return false;
        };

        for capability in agent.capabilities() {
            if let Some(bucket) = self.agents_by_capability.get_mut(capability) {
                bucket.retain(|id| id != agent_id);
            }
        }

        info!(agent = %agent.name(), agent_id, "Unregistered agent");
        true
    }

    pub fn get_agent(&self, agent_id: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(agent_id).cloned()
    }

    /// Agents offering a capability, in the order they were registered.
    /// Ids without a primary entry are treated as stale and skipped.
    pub fn get_agents_by_capability(&self, capability: Capability) -> Vec<Arc<dyn Agent>> {
        self.agents_by_capability
            .get(&capability)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.agents.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Snapshot of all registered agents. Order is unspecified.
    pub fn list_all_agents(&self) -> Vec<Arc<dyn Agent>> {
        self.agents.values().cloned().collect()
    }

    pub fn status(&self) -> RegistryStatus {
        RegistryStatus {
            total_agents: self.agents.len(),
            agents_by_capability: self
                .agents_by_capability
                .iter()
                .map(|(capability, ids)| (capability.as_str().to_string(), ids.len()))
                .collect(),
            agent_details: self.agents.values().map(|agent| agent.status()).collect(),
        }
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
