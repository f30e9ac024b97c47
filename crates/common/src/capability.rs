//! The closed set of capabilities agents can advertise.
//!
//! Capabilities are the sole selection key for task delegation: a task names
//! one, the registry returns the agents that declared it. Keeping the set a
//! closed enum (rather than free-form strings) gives exhaustive dispatch and
//! rules out typo'd tags at compile time; unknown tags arriving over the wire
//! are handled at the delegation boundary instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A skill an agent advertises to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    // Investment management
    PortfolioManagement,
    InvestmentAnalysis,
    AssetAllocation,
    RiskAssessment,
    // Dealer onboarding
    DealerRegistration,
    IdentityVerification,
    ComplianceCheck,
    AccountSetup,
    // Bursary administration
    ScholarshipManagement,
    ApplicationProcessing,
    FundDisbursement,
    StudentSupport,
    // Consulting engagements
    ProposalGeneration,
    ScopeDefinition,
    TimelinePlanning,
    BudgetEstimation,
    // Government contracting
    ContractManagement,
    ComplianceTracking,
    ProcurementAssistance,
    BidPreparation,
    // Operations
    ProcessOperations,
    DocumentProcessing,
    WorkflowOptimization,
    // Research & development
    ResearchManagement,
    InnovationTracking,
    DocumentAnalysis,
    ProjectCoordination,
    // Pricing strategy
    PriceOptimization,
    MarketAnalysis,
    CompetitivePositioning,
    RevenueMaximization,
    // Finance
    FinancialPlanning,
    LedgerIntegration,
    BudgetManagement,
    FinancialReporting,
    // Marketing
    CampaignManagement,
    EmailMarketing,
    ContentAnalysis,
    ApiIntegration,
}

impl Capability {
    /// Every capability, in declaration order. Used to seed registry buckets
    /// so per-capability counts report zero rather than going missing.
    pub const ALL: [Capability; 39] = [
        Capability::PortfolioManagement,
        Capability::InvestmentAnalysis,
        Capability::AssetAllocation,
        Capability::RiskAssessment,
        Capability::DealerRegistration,
        Capability::IdentityVerification,
        Capability::ComplianceCheck,
        Capability::AccountSetup,
        Capability::ScholarshipManagement,
        Capability::ApplicationProcessing,
        Capability::FundDisbursement,
        Capability::StudentSupport,
        Capability::ProposalGeneration,
        Capability::ScopeDefinition,
        Capability::TimelinePlanning,
        Capability::BudgetEstimation,
        Capability::ContractManagement,
        Capability::ComplianceTracking,
        Capability::ProcurementAssistance,
        Capability::BidPreparation,
        Capability::ProcessOperations,
        Capability::DocumentProcessing,
        Capability::WorkflowOptimization,
        Capability::ResearchManagement,
        Capability::InnovationTracking,
        Capability::DocumentAnalysis,
        Capability::ProjectCoordination,
        Capability::PriceOptimization,
        Capability::MarketAnalysis,
        Capability::CompetitivePositioning,
        Capability::RevenueMaximization,
        Capability::FinancialPlanning,
        Capability::LedgerIntegration,
        Capability::BudgetManagement,
        Capability::FinancialReporting,
        Capability::CampaignManagement,
        Capability::EmailMarketing,
        Capability::ContentAnalysis,
        Capability::ApiIntegration,
    ];

    /// The snake_case wire form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::PortfolioManagement => "portfolio_management",
            Capability::InvestmentAnalysis => "investment_analysis",
            Capability::AssetAllocation => "asset_allocation",
            Capability::RiskAssessment => "risk_assessment",
            Capability::DealerRegistration => "dealer_registration",
            Capability::IdentityVerification => "identity_verification",
            Capability::ComplianceCheck => "compliance_check",
            Capability::AccountSetup => "account_setup",
            Capability::ScholarshipManagement => "scholarship_management",
            Capability::ApplicationProcessing => "application_processing",
            Capability::FundDisbursement => "fund_disbursement",
            Capability::StudentSupport => "student_support",
            Capability::ProposalGeneration => "proposal_generation",
            Capability::ScopeDefinition => "scope_definition",
            Capability::TimelinePlanning => "timeline_planning",
            Capability::BudgetEstimation => "budget_estimation",
            Capability::ContractManagement => "contract_management",
            Capability::ComplianceTracking => "compliance_tracking",
            Capability::ProcurementAssistance => "procurement_assistance",
            Capability::BidPreparation => "bid_preparation",
            Capability::ProcessOperations => "process_operations",
            Capability::DocumentProcessing => "document_processing",
            Capability::WorkflowOptimization => "workflow_optimization",
            Capability::ResearchManagement => "research_management",
            Capability::InnovationTracking => "innovation_tracking",
            Capability::DocumentAnalysis => "document_analysis",
            Capability::ProjectCoordination => "project_coordination",
            Capability::PriceOptimization => "price_optimization",
            Capability::MarketAnalysis => "market_analysis",
            Capability::CompetitivePositioning => "competitive_positioning",
            Capability::RevenueMaximization => "revenue_maximization",
            Capability::FinancialPlanning => "financial_planning",
            Capability::LedgerIntegration => "ledger_integration",
            Capability::BudgetManagement => "budget_management",
            Capability::FinancialReporting => "financial_reporting",
            Capability::CampaignManagement => "campaign_management",
            Capability::EmailMarketing => "email_marketing",
            Capability::ContentAnalysis => "content_analysis",
            Capability::ApiIntegration => "api_integration",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known capability tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCapability;

impl fmt::Display for UnknownCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown capability tag")
    }
}

impl std::error::Error for UnknownCapability {}

/// Unknown tags are not an error at this level; callers decide whether an
/// unrecognized selector is a validation failure or just a capability
/// nobody offers.
impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .find(|cap| cap.as_str() == s)
            .copied()
            .ok_or(UnknownCapability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_matches_serde() {
        for cap in Capability::ALL {
            let json = serde_json::to_value(cap).unwrap();
            assert_eq!(json, serde_json::Value::String(cap.as_str().to_string()));
        }
    }

    #[test]
    fn test_parse_known_tag() {
        assert_eq!(
            "portfolio_management".parse::<Capability>(),
            Ok(Capability::PortfolioManagement)
        );
        assert_eq!(
            "api_integration".parse::<Capability>(),
            Ok(Capability::ApiIntegration)
        );
    }

    #[test]
    fn test_parse_unknown_tag() {
        assert!("nonexistent_capability_xyz".parse::<Capability>().is_err());
        assert!("".parse::<Capability>().is_err());
    }

    #[test]
    fn test_all_tags_distinct() {
        let mut tags: Vec<&str> = Capability::ALL.iter().map(|c| c.as_str()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), Capability::ALL.len());
    }
}
