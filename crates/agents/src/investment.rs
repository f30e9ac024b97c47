//! Investment agent - portfolio management, analysis, and advisory.

use async_trait::async_trait;
use chrono::Utc;
use overseer_common::{Agent, AgentCore, Capability, OverseerError, Result, Task};
use serde_json::{json, Value};
use tracing::info;

/// Agent for managing investment portfolios and providing investment advice.
pub struct InvestmentAgent {
    core: AgentCore,
}

impl InvestmentAgent {
    pub fn new() -> Self {
        Self {
            core: AgentCore::new(
                "Investment Manager",
                "Portfolio management, investment analysis, and advisory",
                vec![
                    Capability::PortfolioManagement,
                    Capability::InvestmentAnalysis,
                    Capability::AssetAllocation,
                    Capability::RiskAssessment,
                ],
            ),
        }
    }

    async fn analyze_portfolio(&self, data: &Value) -> Result<Value> {
        let portfolio_id = data["portfolio_id"].as_str().unwrap_or_default();
        let total_holdings = data["holdings"].as_array().map_or(0, |h| h.len());

        info!(portfolio_id, "Portfolio analysis completed");
        Ok(json!({
            "portfolio_id": portfolio_id,
            "total_holdings": total_holdings,
            "diversification_score": 0.75,
            "performance_metrics": {
                "ytd_return": 12.5,
                "1_year_return": 8.3,
                "3_year_return": 7.1
            },
            "analysis_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn allocate_assets(&self, data: &Value) -> Result<Value> {
        let investment_amount = data["investment_amount"].as_f64().unwrap_or(0.0);
        let risk_profile = data["risk_profile"].as_str().unwrap_or("moderate");

        let (stocks, bonds, cash) = match risk_profile {
            "conservative" => (0.30, 0.60, 0.10),
            "aggressive" => (0.80, 0.15, 0.05),
            _ => (0.60, 0.30, 0.10),
        };

        info!(risk_profile, "Asset allocation completed");
        Ok(json!({
            "investment_amount": investment_amount,
            "risk_profile": risk_profile,
            "allocation": {
                "stocks": investment_amount * stocks,
                "bonds": investment_amount * bonds,
                "cash": investment_amount * cash,
            },
            "allocation_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn assess_risk(&self, data: &Value) -> Result<Value> {
        let portfolio_value = data["portfolio_value"].as_f64().unwrap_or(0.0);

        info!("Risk assessment completed");
        Ok(json!({
            "portfolio_value": portfolio_value,
            "risk_level": "moderate",
            "var_95": portfolio_value * 0.05,
            "sharpe_ratio": 1.2,
            "beta": 0.95,
            "assessment_timestamp": Utc::now().to_rfc3339(),
        }))
    }

    async fn get_recommendations(&self, data: &Value) -> Result<Value> {
        let market_conditions = data["market_conditions"].as_str().unwrap_or("neutral");

        info!("Investment recommendations generated");
        Ok(json!({
            "market_conditions": market_conditions,
            "recommendations": [
                {"action": "rebalance", "priority": "high", "reason": "Portfolio drift detected"},
                {"action": "increase_exposure", "priority": "medium", "reason": "Bullish market signals"},
                {"action": "hedge_position", "priority": "low", "reason": "Risk mitigation"}
            ],
            "recommendation_timestamp": Utc::now().to_rfc3339(),
        }))
    }
}

impl Default for InvestmentAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for InvestmentAgent {
    fn core(&self) -> &AgentCore {
        &self.core
    }

    async fn handle_task(&self, task: &Task) -> Result<Value> {
        match task.action.as_deref() {
            Some("analyze_portfolio") => self.analyze_portfolio(&task.data).await,
            Some("allocate_assets") => self.allocate_assets(&task.data).await,
            Some("assess_risk") => self.assess_risk(&task.data).await,
            Some("get_recommendations") => self.get_recommendations(&task.data).await,
            other => Err(OverseerError::Agent(format!(
                "unknown action: {}",
                other.unwrap_or_default()
            ))),
        }
    }
}
