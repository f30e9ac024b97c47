//! Bursary agent - scholarship programs, funding applications, student support.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

/// Agent for bursary management and scholarship administration.
pub struct BursaryAgent {
    core: AgentCore,
}

impl BursaryAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Bursary Manager",
                "Scholarship programs, funding applications, and student support",
                vec![
                    Capability::ScholarshipManagement,
                    Capability::ApplicationProcessing,
                    Capability::FundDisbursement,
                    Capability::StudentSupport,
                ],
            ),
        }
    }

    async fn process_application(&self, data: &Value) -> Result<Value> {
        let student_id = data["student_id"].as_str().unwrap_or_default();

        info!(student_id, "Application processed");
        Ok(json!({
            "application_id": format!("APP_{}", Utc::now().timestamp_millis()),
            "student_id": student_id,
            "scholarship_type": data["scholarship_type"].clone(),
            "status": "received",
            "application_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn evaluate_eligibility(&self, data: &Value) -> Result<Value> {
        let student_id = data["student_id"].as_str().unwrap_or_default();
        let gpa = data["gpa"].as_f64().unwrap_or(0.0);
        let income_level = data["income_level"].as_str().unwrap_or_default();

        let gpa_criteria_met = gpa >= 3.0;
        let financial_criteria_met = income_level == "low";

        info!(student_id, "Eligibility evaluation completed");
        Ok(json!({
            "student_id": student_id,
            "eligible": gpa_criteria_met && financial_criteria_met,
            "gpa_criteria_met": gpa_criteria_met,
            "financial_criteria_met": financial_criteria_met,
            "eligibility_score": if gpa >= 3.5 { 0.85 } else { 0.70 },
            "evaluation_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn disburse_funds(&self, data: &Value) -> Result<Value> {
        let student_id = data["student_id"].as_str().unwrap_or_default();
        let amount = data["amount"].as_f64().unwrap_or(0.0);

        info!(student_id, amount, "Funds disbursed");
        Ok(json!({
            "student_id": student_id,
            "amount": amount,
            "status": "disbursed",
            "transaction_id": format!("TXN_{}", Utc::now().timestamp_millis()),
            "disbursement_date": Utc::now().to_rfc3339(),
        }))
    }

    async fn provide_support(&self, data: &Value) -> Result<Value> {
        let student_id = data["student_id"].as_str().unwrap_or_default();

        info!(student_id, "Support provided");
        Ok(json!({
            "student_id": student_id,
            "support_type": data["support_type"].clone(),
            "services": ["academic_mentoring", "career_counseling", "financial_guidance"],
            "support_provided": true,
            "support_timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for BursaryAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for BursaryAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("process_application") => self.process_application(&task.data).await,
            Some("evaluate_eligibility") => self.evaluate_eligibility(&task.data).await,
            Some("disburse_funds") => self.disburse_funds(&task.data).await,
            Some("provide_support") => self.provide_support(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
