//! Government contracting agent - contracts, compliance, procurement, bids.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

pub struct GovernmentContractingAgent {
    core: AgentCore,
}

impl GovernmentContractingAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Government Relations Manager",
                "Government contracts, compliance, and procurement",
                vec![
                    Capability::ContractManagement,
                    Capability::ComplianceTracking,
                    Capability::ProcurementAssistance,
                    Capability::BidPreparation,
                ],
            ),
        }
    }

    async fn manage_contract(&self, data: &Value) -> Result<Value> {
        let contract_number = data["contract_number"].as_str().unwrap_or_default();
        let agency = data["agency"].as_str().unwrap_or_default();

        info!(contract_number, agency, "Contract managed");
        Ok(json!({
            "contract_id": format!("GOV_{contract_number}"),
            "agency": agency,
            "status": "active",
            "compliance_level": "compliant",
            "management_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn check_compliance(&self, data: &Value) -> Result<Value> {
        let contract_id = data["contract_id"].as_str().unwrap_or_default();

        info!(contract_id, "Compliance check completed");
        Ok(json!({
            "contract_id": contract_id,
            "checks": {
                "federal_acquisition_regulation": "passed",
                "security_requirements": "passed",
                "labor_standards": "passed",
                "environmental_compliance": "passed",
                "minority_business": "passed"
            },
            "overall_status": "compliant",
            "compliance_score": 0.98,
            "check_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn prepare_bid(&self, data: &Value) -> Result<Value> {
        let opportunity_id = data["opportunity_id"].as_str().unwrap_or_default();

        info!(opportunity_id, "Bid prepared");
        Ok(json!({
            "bid_id": format!("BID_{opportunity_id}"),
            "opportunity_id": opportunity_id,
            "bid_amount": data["bid_amount"].clone(),
            "status": "prepared",
            "required_documents": [
                "company_profile",
                "past_performance",
                "security_clearance",
                "financial_statements"
            ],
            "preparation_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn track_requirements(&self, data: &Value) -> Result<Value> {
        let contract_id = data["contract_id"].as_str().unwrap_or_default();

        info!(contract_id, "Requirements tracked");
        Ok(json!({
            "contract_id": contract_id,
            "requirements": [
                {"requirement": "Security Clearance Level", "status": "met"},
                {"requirement": "CAGE Code Registration", "status": "met"},
                {"requirement": "Insurance Coverage", "status": "met"},
                {"requirement": "Accounting Standards", "status": "met"}
            ],
            "all_requirements_met": true,
            "tracking_timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for GovernmentContractingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for GovernmentContractingAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("manage_contract") => self.manage_contract(&task.data).await,
            Some("check_compliance") => self.check_compliance(&task.data).await,
            Some("prepare_bid") => self.prepare_bid(&task.data).await,
            Some("track_requirements") => self.track_requirements(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
