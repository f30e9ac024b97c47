//! Integration tests for the HTTP surface, exercised in-process.

use axum_test::TestServer;
use overseer_agents::default_agents;
use overseer_api::{create_router, AppState};
use overseer_supervisor::SupervisorConfig;
use serde_json::{json, Value};
use std::sync::Arc;

async fn test_server() -> (TestServer, Arc<AppState>) {
    let config = SupervisorConfig {
        name: "Overseer".into(),
        ..Default::default()
    };
    let state = Arc::new(AppState::new(&config, default_agents()));
    let server = TestServer::new(create_router(state.clone())).unwrap();
    (server, state)
}

#[tokio::test]
async fn test_root_banner() {
    let (server, _state) = test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "online");
    assert_eq!(body["service"], "Overseer");
}

#[tokio::test]
async fn test_health_reflects_running_flag() {
    let (server, state) = test_server().await;

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["running"], false);

    state.supervisor.write().await.start().await.unwrap();

    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["running"], true);
}

#[tokio::test]
async fn test_status_reports_the_fleet() {
    let (server, _state) = test_server().await;

    let body: Value = server.get("/status").await.json();
    assert_eq!(body["supervisor"], "Overseer");
    assert_eq!(body["registry"]["total_agents"], 10);
    assert_eq!(body["registry"]["agents_by_capability"]["api_integration"], 2);
    assert_eq!(
        body["registry"]["agent_details"].as_array().unwrap().len(),
        10
    );
}

#[tokio::test]
async fn test_delegate_task_happy_path() {
    let (server, state) = test_server().await;
    state.supervisor.write().await.start().await.unwrap();

    let response = server
        .post("/task/delegate")
        .json(&json!({
            "capability": "price_optimization",
            "action": "optimize_price",
            "data": {"product_id": "SKU-9", "cost": 10.0}
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["agent_name"], "Pricing Specialist");
    assert_eq!(body["result"]["current_price"], 25.0);
}

#[tokio::test]
async fn test_delegate_task_without_capability_is_400() {
    let (server, _state) = test_server().await;

    let response = server.post("/task/delegate").json(&json!({})).await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_TASK");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("capability"));
}

#[tokio::test]
async fn test_delegate_task_unknown_capability_is_200_with_failure() {
    let (server, _state) = test_server().await;

    let response = server
        .post("/task/delegate")
        .json(&json!({"capability": "nonexistent_capability_xyz"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("nonexistent_capability_xyz"));
}

#[tokio::test]
async fn test_delegate_task_execution_failure_is_200_with_failure() {
    let (server, _state) = test_server().await;

    let response = server
        .post("/task/delegate")
        .json(&json!({
            "capability": "financial_planning",
            "action": "transmute_gold"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("unknown action"));
    assert!(body["agent_id"].is_string());
}
