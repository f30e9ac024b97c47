//! Pricing agent - price optimization and market analysis.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

pub struct PricingAgent {
    core: AgentCore,
}

impl PricingAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Pricing Specialist",
                "Pricing analysis and strategy optimization",
                vec![
                    Capability::PriceOptimization,
                    Capability::MarketAnalysis,
                    Capability::CompetitivePositioning,
                    Capability::RevenueMaximization,
                ],
            ),
        }
    }

    async fn optimize_price(&self, data: &Value) -> Result<Value> {
        let product_id = data["product_id"].as_str().unwrap_or_default();
        let cost = data["cost"].as_f64().unwrap_or(0.0);

        info!(product_id, "Price optimized");
        Ok(json!({
            "product_id": product_id,
            "current_price": cost * 2.5,
            "optimized_price": cost * 2.8,
            "price_increase_percentage": 12,
            "expected_revenue_increase": "18%",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn analyze_market(&self, data: &Value) -> Result<Value> {
        let market_segment = data["market_segment"].as_str().unwrap_or_default();

        info!(market_segment, "Market analyzed");
        Ok(json!({
            "segment": market_segment,
            "market_size": 50_000_000,
            "growth_rate": 0.15,
            "pricing_trends": "upward",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn competitive_analysis(&self, data: &Value) -> Result<Value> {
        let competitor_id = data["competitor_id"].as_str().unwrap_or_default();

        info!(competitor_id, "Competitive analysis completed");
        Ok(json!({
            "competitor": competitor_id,
            "price_comparison": "10% lower",
            "value_proposition": "superior",
            "recommendation": "maintain_premium_pricing",
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for PricingAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for PricingAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("optimize_price") => self.optimize_price(&task.data).await,
            Some("analyze_market") => self.analyze_market(&task.data).await,
            Some("competitive_analysis") => self.competitive_analysis(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
