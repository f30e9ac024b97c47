//! Application state for the API server.

use overseer_common::Agent;
use overseer_supervisor::{Supervisor, SupervisorConfig};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for the API server.
///
/// The supervisor is injected here explicitly; handlers reach it through
/// the state extractor rather than a process-wide global. All registry
/// mutation goes through the write half of the lock.
pub struct AppState {
    /// The supervisor handling all delegation
    pub supervisor: Arc<RwLock<Supervisor>>,

    /// Server start time (for health checks)
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state with the given configuration and agent
    /// fleet. Agents are registered immediately; call `start()` on the
    /// supervisor to initialize them.
    pub fn new(config: &SupervisorConfig, agents: Vec<Arc<dyn Agent>>) -> Self {
        let mut supervisor = Supervisor::new(config.name.as_str());
        for agent in agents {
            supervisor.register_agent(agent);
        }

        Self {
            supervisor: Arc::new(RwLock::new(supervisor)),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
