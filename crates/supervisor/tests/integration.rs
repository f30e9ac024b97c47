//! Integration tests for the supervisor's registration and delegation
//! pipeline, using simulated agents plus the real specialist fleet.

use async_trait::async_trait;
use overseer_agents::default_agents;
use overseer_common::{
    Agent, AgentCore, AgentState, Capability, OverseerError, Result, Task,
};
use overseer_supervisor::Supervisor;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A mock agent with configurable capabilities and failure behavior.
struct SimulatedAgent {
    core: AgentCore,
    response: serde_json::Value,
    should_fail: bool,
    execute_count: AtomicUsize,
}

impl SimulatedAgent {
    fn new(name: &str, capabilities: Vec<Capability>) -> Self {
        Self {
            core: AgentCore::new(name, "simulated agent", capabilities),
            response: json!({"from": name}),
            should_fail: false,
            execute_count: AtomicUsize::new(0),
        }
    }

    fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait]
impl Agent for SimulatedAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, _task: &Task) -> Result<serde_json::Value> {
        self.execute_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(OverseerError::Agent("boom".into()));
        }
        Ok(self.response.clone())
    }
}

// ============================================================================
// Validation vs lookup miss
// ============================================================================

#[tokio::test]
async fn test_task_without_capability_is_a_validation_error() {
    let supervisor = Supervisor::new("Test");
    let err = supervisor.delegate_task(&Task::default()).await.unwrap_err();
    assert!(matches!(err, OverseerError::MissingCapability));
}

#[tokio::test]
async fn test_empty_capability_is_a_validation_error() {
    let supervisor = Supervisor::new("Test");
    let task = Task::new("");
    assert!(matches!(
        supervisor.delegate_task(&task).await.unwrap_err(),
        OverseerError::MissingCapability
    ));
}

#[tokio::test]
async fn test_unknown_capability_is_a_structured_miss() {
    let supervisor = Supervisor::new("Test");
    let task = Task::new("nonexistent_capability_xyz");

    let outcome = supervisor.delegate_task(&task).await.unwrap();

    assert!(!outcome.success);
    assert!(outcome
        .error
        .as_deref()
        .unwrap()
        .contains("nonexistent_capability_xyz"));
    assert!(outcome.agent_id.is_none());
}

#[tokio::test]
async fn test_known_capability_with_no_agents_is_a_structured_miss() {
    let supervisor = Supervisor::new("Test");
    let task = Task::new("market_analysis");

    let outcome = supervisor.delegate_task(&task).await.unwrap();

    assert!(!outcome.success);
    assert!(outcome.error.as_deref().unwrap().contains("market_analysis"));
}

// ============================================================================
// Selection and execution
// ============================================================================

#[tokio::test]
async fn test_first_match_selection_is_deterministic() {
    let mut supervisor = Supervisor::new("Test");
    let first = Arc::new(SimulatedAgent::new("A", vec![Capability::MarketAnalysis]));
    let second = Arc::new(SimulatedAgent::new("B", vec![Capability::MarketAnalysis]));
    let first_id = first.agent_id().to_string();

    supervisor.register_agent(first.clone());
    supervisor.register_agent(second.clone());

    let task = Task::new("market_analysis");
    for _ in 0..5 {
        let outcome = supervisor.delegate_task(&task).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.agent_id.as_deref(), Some(first_id.as_str()));
    }

    assert_eq!(first.execute_count.load(Ordering::SeqCst), 5);
    assert_eq!(second.execute_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_delegation_wraps_agent_result() {
    let mut supervisor = Supervisor::new("Test");
    supervisor.register_agent(Arc::new(SimulatedAgent::new(
        "Analyst",
        vec![Capability::MarketAnalysis],
    )));

    let outcome = supervisor
        .delegate_task(&Task::new("market_analysis"))
        .await
        .unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.agent_name.as_deref(), Some("Analyst"));
    assert_eq!(outcome.result.unwrap()["from"], "Analyst");
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_execution_failure_is_captured_in_the_envelope() {
    let mut supervisor = Supervisor::new("Test");
    let agent = Arc::new(SimulatedAgent::new("Flaky", vec![Capability::MarketAnalysis]).failing());
    let agent_id = agent.agent_id().to_string();
    supervisor.register_agent(agent.clone());

    let outcome = supervisor
        .delegate_task(&Task::new("market_analysis"))
        .await
        .unwrap();

    assert!(!outcome.success);
    assert!(outcome.error.as_deref().unwrap().contains("boom"));
    assert_eq!(outcome.agent_id.as_deref(), Some(agent_id.as_str()));
    assert_eq!(agent.state(), AgentState::Error);
    assert_eq!(agent.status().error_count, 1);
}

// ============================================================================
// Status reporting
// ============================================================================

#[tokio::test]
async fn test_registration_is_reflected_in_status() {
    let mut supervisor = Supervisor::new("Test");
    let before = supervisor.status().registry;

    supervisor.register_agent(Arc::new(SimulatedAgent::new(
        "Analyst",
        vec![Capability::MarketAnalysis, Capability::PriceOptimization],
    )));

    let after = supervisor.status().registry;
    assert_eq!(after.total_agents, before.total_agents + 1);
    assert_eq!(
        after.agents_by_capability["market_analysis"],
        before.agents_by_capability["market_analysis"] + 1
    );
    assert_eq!(
        after.agents_by_capability["price_optimization"],
        before.agents_by_capability["price_optimization"] + 1
    );
}

// ============================================================================
// Full fleet
// ============================================================================

fn fleet_supervisor() -> Supervisor {
    let mut supervisor = Supervisor::new("Overseer");
    for agent in default_agents() {
        supervisor.register_agent(agent);
    }
    supervisor
}

#[tokio::test]
async fn test_start_and_stop_drive_fleet_lifecycle() {
    let mut supervisor = fleet_supervisor();
    assert!(!supervisor.is_running());

    supervisor.start().await.unwrap();
    assert!(supervisor.is_running());
    for agent in supervisor.registry().list_all_agents() {
        assert_eq!(agent.state(), AgentState::Active);
    }

    supervisor.stop().await.unwrap();
    assert!(!supervisor.is_running());
    for agent in supervisor.registry().list_all_agents() {
        assert_eq!(agent.state(), AgentState::Shutdown);
    }
}

#[tokio::test]
async fn test_fleet_delegation_end_to_end() {
    let mut supervisor = fleet_supervisor();
    supervisor.start().await.unwrap();

    let task = Task::new("financial_reporting")
        .with_action("generate_report")
        .with_data(json!({"report_type": "annual"}));
    let outcome = supervisor.delegate_task(&task).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.agent_name.as_deref(), Some("CFO Manager"));
    assert_eq!(outcome.result.unwrap()["report_type"], "annual");

    let status = supervisor.status();
    assert_eq!(status.supervisor, "Overseer");
    assert!(status.running);
    assert_eq!(status.registry.total_agents, 10);
}
