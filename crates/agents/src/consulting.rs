//! Consulting agent - proposal generation and engagement planning.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

pub struct ConsultingAgent {
    core: AgentCore,
}

impl ConsultingAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Consulting Specialist",
                "Consulting proposals, scoping, timelines, and budgets",
                vec![
                    Capability::ProposalGeneration,
                    Capability::ScopeDefinition,
                    Capability::TimelinePlanning,
                    Capability::BudgetEstimation,
                ],
            ),
        }
    }

    async fn generate_proposal(&self, data: &Value) -> Result<Value> {
        let client_name = data["client_name"].as_str().unwrap_or_default();

        info!(client_name, "Proposal generated");
        Ok(json!({
            "proposal_id": format!("PROP_{}", Utc::now().timestamp_millis()),
            "client_name": client_name,
            "project_type": data["project_type"].clone(),
            "status": "draft",
            "sections": [
                "executive_summary",
                "objectives",
                "methodology",
                "timeline",
                "budget",
                "team",
                "success_metrics"
            ],
            "generation_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn define_scope(&self, data: &Value) -> Result<Value> {
        let project_name = data["project_name"].as_str().unwrap_or_default();

        info!(project_name, "Scope defined");
        Ok(json!({
            "project_name": project_name,
            "deliverables": data["deliverables"].as_array().cloned().unwrap_or_default(),
            "exclusions": ["maintenance", "support beyond scope"],
            "assumptions": ["client participation", "data availability", "approvals timeline"],
            "scope_definition_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn plan_timeline(&self, data: &Value) -> Result<Value> {
        let project_id = data["project_id"].as_str().unwrap_or_default();
        let duration_weeks = data["duration_weeks"].as_u64().unwrap_or(12);

        info!(project_id, "Timeline planned");
        Ok(json!({
            "project_id": project_id,
            "duration_weeks": duration_weeks,
            "phases": [
                {"phase": "Discovery", "weeks": 2},
                {"phase": "Design", "weeks": 4},
                {"phase": "Implementation", "weeks": 4},
                {"phase": "Testing & Review", "weeks": 2}
            ],
            "timeline_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn estimate_budget(&self, data: &Value) -> Result<Value> {
        let complexity = data["complexity"].as_str().unwrap_or("medium");
        let team_size = data["team_size"].as_u64().unwrap_or(3);

        let base_cost: u64 = match complexity {
            "low" => 50_000,
            "high" => 200_000,
            _ => 100_000,
        };
        let total_budget = base_cost * team_size;

        info!(total_budget, "Budget estimated");
        Ok(json!({
            "complexity": complexity,
            "team_size": team_size,
            "base_cost": base_cost,
            "total_budget": total_budget,
            "currency": "USD",
            "budget_estimation_timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for ConsultingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for ConsultingAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("generate_proposal") => self.generate_proposal(&task.data).await,
            Some("define_scope") => self.define_scope(&task.data).await,
            Some("plan_timeline") => self.plan_timeline(&task.data).await,
            Some("estimate_budget") => self.estimate_budget(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
