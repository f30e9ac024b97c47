//! Integration tests for the specialist agent fleet.
//!
//! Agents are pure stubs, so every test runs without external services.

use overseer_agents::{
    default_agents, CfoAgent, InvestmentAgent, MarketingAgent, OperationsAgent, PricingAgent,
};
use overseer_common::{Agent, AgentState, Capability, Task};
use serde_json::json;
use std::collections::HashSet;

// ============================================================================
// Fleet composition
// ============================================================================

#[test]
fn test_fleet_has_ten_agents_with_distinct_ids() {
    let fleet = default_agents();
    assert_eq!(fleet.len(), 10);

    let ids: HashSet<String> = fleet.iter().map(|a| a.agent_id().to_string()).collect();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_every_agent_declares_capabilities() {
    for agent in default_agents() {
        assert!(
            !agent.capabilities().is_empty(),
            "{} declares no capabilities",
            agent.name()
        );
        assert_eq!(agent.state(), AgentState::Idle);
    }
}

#[test]
fn test_api_integration_is_shared() {
    let offering: Vec<String> = default_agents()
        .iter()
        .filter(|a| a.has_capability(Capability::ApiIntegration))
        .map(|a| a.name().to_string())
        .collect();

    assert_eq!(offering.len(), 2);
    assert!(offering.contains(&"Operations Manager".to_string()));
    assert!(offering.contains(&"Marketing Specialist".to_string()));
}

// ============================================================================
// Action dispatch
// ============================================================================

#[tokio::test]
async fn test_investment_allocates_by_risk_profile() {
    let agent = InvestmentAgent::new();
    let task = Task::new("asset_allocation")
        .with_action("allocate_assets")
        .with_data(json!({"investment_amount": 1000.0, "risk_profile": "conservative"}));

    let result = agent.execute(&task).await.unwrap();

    assert_eq!(result["allocation"]["stocks"], 300.0);
    assert_eq!(result["allocation"]["bonds"], 600.0);
    assert_eq!(result["allocation"]["cash"], 100.0);
}

#[tokio::test]
async fn test_cfo_generates_report_with_default_type() {
    let agent = CfoAgent::new();
    let task = Task::new("financial_reporting").with_action("generate_report");

    let result = agent.execute(&task).await.unwrap();

    assert_eq!(result["report_type"], "quarterly");
    assert_eq!(result["financials"]["net_income"], 1_500_000);
}

#[tokio::test]
async fn test_pricing_optimizes_from_cost() {
    let agent = PricingAgent::new();
    let task = Task::new("price_optimization")
        .with_action("optimize_price")
        .with_data(json!({"product_id": "SKU-1", "cost": 100.0}));

    let result = agent.execute(&task).await.unwrap();

    assert_eq!(result["current_price"], 250.0);
    assert_eq!(result["optimized_price"], 280.0);
}

#[tokio::test]
async fn test_marketing_counts_recipients() {
    let agent = MarketingAgent::new();
    let task = Task::new("email_marketing")
        .with_action("send_email_campaign")
        .with_data(json!({"campaign_id": "CAMP_1", "recipients": ["a@x", "b@x", "c@x"]}));

    let result = agent.execute(&task).await.unwrap();

    assert_eq!(result["recipients_count"], 3);
    assert_eq!(result["status"], "sent");
}

#[tokio::test]
async fn test_operations_handles_missing_data() {
    let agent = OperationsAgent::new();
    let task = Task::new("document_processing").with_action("process_document");

    // No data block at all; defaults apply.
    let result = agent.execute(&task).await.unwrap();
    assert_eq!(result["doc_type"], "invoice");
    assert_eq!(result["status"], "processed");
}

// ============================================================================
// Failure paths and lifecycle
// ============================================================================

#[tokio::test]
async fn test_unknown_action_fails_and_marks_error_state() {
    let agent = CfoAgent::new();
    agent.initialize().await.unwrap();

    let task = Task::new("financial_planning").with_action("transmute_gold");
    let err = agent.execute(&task).await.unwrap_err();

    assert!(err.to_string().contains("unknown action: transmute_gold"));
    assert_eq!(agent.state(), AgentState::Error);
    assert_eq!(agent.status().error_count, 1);
}

#[tokio::test]
async fn test_missing_action_fails() {
    let agent = InvestmentAgent::new();
    let task = Task::new("risk_assessment");

    assert!(agent.execute(&task).await.is_err());
}

#[tokio::test]
async fn test_agent_recovers_after_error() {
    let agent = CfoAgent::new();
    agent.initialize().await.unwrap();

    let bad = Task::new("financial_planning").with_action("nope");
    let _ = agent.execute(&bad).await;
    assert_eq!(agent.state(), AgentState::Error);

    let good = Task::new("financial_planning").with_action("manage_finances");
    let result = agent.execute(&good).await.unwrap();

    assert_eq!(result["ledger_sync_status"], "synced");
    assert_eq!(agent.state(), AgentState::Active);
}

#[tokio::test]
async fn test_fleet_initialize_and_shutdown() {
    let fleet = default_agents();
    for agent in &fleet {
        agent.initialize().await.unwrap();
        assert_eq!(agent.state(), AgentState::Active);
    }
    for agent in &fleet {
        agent.shutdown().await.unwrap();
        assert_eq!(agent.state(), AgentState::Shutdown);
    }
}
