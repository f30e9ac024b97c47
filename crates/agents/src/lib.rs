//! Specialist agents for the Overseer delegation system.
//!
//! Each agent covers one business domain, declares the capabilities it
//! offers, and dispatches incoming tasks on their `action` field. Domain
//! results are canned placeholder payloads; the delegation machinery treats
//! them as opaque.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AGENT FLEET                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Investment   Dealer    Bursary   Consulting   Government    │
//! │  Operations   R&D       Pricing   CFO          Marketing     │
//! └──────────────────────────────────────────────────────────────┘
//!          each registered with the supervisor at startup
//! ```

pub mod bursary;
pub mod cfo;
pub mod consulting;
pub mod dealer;
pub mod government;
pub mod investment;
pub mod marketing;
pub mod operations;
pub mod pricing;
pub mod research;

pub use bursary::BursaryAgent;
pub use cfo::CfoAgent;
pub use consulting::ConsultingAgent;
pub use dealer::DealerOnboardingAgent;
pub use government::GovernmentContractingAgent;
pub use investment::InvestmentAgent;
pub use marketing::MarketingAgent;
pub use operations::OperationsAgent;
pub use pricing::PricingAgent;
pub use research::ResearchDevelopmentAgent;

use overseer_common::Agent;
use std::sync::Arc;

/// The full fleet, ready for registration at process startup.
pub fn default_agents() -> Vec<Arc<dyn Agent>> {
    vec![
        Arc::new(InvestmentAgent::new()),
        Arc::new(DealerOnboardingAgent::new()),
        Arc::new(BursaryAgent::new()),
        Arc::new(ConsultingAgent::new()),
        Arc::new(GovernmentContractingAgent::new()),
        Arc::new(OperationsAgent::new()),
        Arc::new(ResearchDevelopmentAgent::new()),
        Arc::new(PricingAgent::new()),
        Arc::new(CfoAgent::new()),
        Arc::new(MarketingAgent::new()),
    ]
}
