//! Dealer onboarding agent - registration, verification, and account setup.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

/// Agent for dealer onboarding and account management.
pub struct DealerOnboardingAgent {
    core: AgentCore,
}

impl DealerOnboardingAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Dealer Onboarding Specialist",
                "Dealer registration, verification, and onboarding",
                vec![
                    Capability::DealerRegistration,
                    Capability::IdentityVerification,
                    Capability::ComplianceCheck,
                    Capability::AccountSetup,
                ],
            ),
        }
    }

    async fn register_dealer(&self, data: &Value) -> Result<Value> {
        let dealer_name = data["dealer_name"].as_str().unwrap_or_default();

        info!(dealer_name, "Dealer registered");
        Ok(json!({
            "dealer_id": format!("DEALER_{}", Utc::now().timestamp_millis()),
            "dealer_name": dealer_name,
            "contact_email": data["contact_email"].clone(),
            "business_type": data["business_type"].clone(),
            "status": "registered",
            "registration_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn verify_identity(&self, data: &Value) -> Result<Value> {
        let dealer_id = data["dealer_id"].as_str().unwrap_or_default();

        info!(dealer_id, "Identity verification completed");
        Ok(json!({
            "dealer_id": dealer_id,
            "verification_status": "verified",
            "verification_score": 0.98,
            "documents_checked": ["passport", "business_license"],
            "verification_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn check_compliance(&self, data: &Value) -> Result<Value> {
        let dealer_id = data["dealer_id"].as_str().unwrap_or_default();

        info!(dealer_id, "Compliance check completed");
        Ok(json!({
            "dealer_id": dealer_id,
            "compliance_status": "compliant",
            "checks": {
                "kyc": "passed",
                "aml": "passed",
                "sanctions_screening": "passed",
                "business_registration": "passed"
            },
            "compliance_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn setup_account(&self, data: &Value) -> Result<Value> {
        let dealer_id = data["dealer_id"].as_str().unwrap_or_default();
        let account_type = data["account_type"].as_str().unwrap_or("standard");

        info!(dealer_id, "Account setup completed");
        Ok(json!({
            "dealer_id": dealer_id,
            "account_id": format!("ACC_{dealer_id}"),
            "account_type": account_type,
            "status": "active",
            "api_key_generated": true,
            "setup_timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for DealerOnboardingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for DealerOnboardingAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("register_dealer") => self.register_dealer(&task.data).await,
            Some("verify_identity") => self.verify_identity(&task.data).await,
            Some("check_compliance") => self.check_compliance(&task.data).await,
            Some("setup_account") => self.setup_account(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
