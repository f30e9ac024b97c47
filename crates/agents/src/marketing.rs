//! Marketing agent - campaigns, email delivery, and content analysis.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

pub struct MarketingAgent {
    core: AgentCore,
}

impl MarketingAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Marketing Specialist",
                "Campaign management, email marketing, and content analysis",
                vec![
                    Capability::CampaignManagement,
                    Capability::EmailMarketing,
                    Capability::ContentAnalysis,
                    Capability::ApiIntegration,
                ],
            ),
        }
    }

    async fn create_campaign(&self, data: &Value) -> Result<Value> {
        let campaign_name = data["campaign_name"].as_str().unwrap_or_default();

        info!(campaign_name, "Campaign created");
        Ok(json!({
            "campaign_id": format!("CAMP_{}", Utc::now().timestamp_millis()),
            "campaign_name": campaign_name,
            "status": "created",
            "content_analysis": "enabled",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn send_email_campaign(&self, data: &Value) -> Result<Value> {
        let campaign_id = data["campaign_id"].as_str().unwrap_or_default();
        let recipients_count = data["recipients"].as_array().map_or(0, |r| r.len());

        info!(campaign_id, recipients_count, "Email campaign sent");
        Ok(json!({
            "campaign_id": campaign_id,
            "recipients_count": recipients_count,
            "status": "sent",
            "message_id": format!("MSG_{campaign_id}"),
            "delivery_status": "sent",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn analyze_content(&self, data: &Value) -> Result<Value> {
        let content_text = data["content_text"].as_str().unwrap_or_default();

        info!("Content analyzed");
        Ok(json!({
            "content_length": content_text.len(),
            "analysis_result": "completed",
            "sentiment": "positive",
            "entities": ["brand", "product", "customer"],
            "optimization_score": 0.88,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn track_performance(&self, data: &Value) -> Result<Value> {
        let campaign_id = data["campaign_id"].as_str().unwrap_or_default();

        info!(campaign_id, "Campaign performance tracked");
        Ok(json!({
            "campaign_id": campaign_id,
            "metrics": {
                "open_rate": 0.45,
                "click_rate": 0.12,
                "conversion_rate": 0.05,
                "unsubscribe_rate": 0.01
            },
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for MarketingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for MarketingAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("create_campaign") => self.create_campaign(&task.data).await,
            Some("send_email_campaign") => self.send_email_campaign(&task.data).await,
            Some("analyze_content") => self.analyze_content(&task.data).await,
            Some("track_performance") => self.track_performance(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
