//! Task-delegation supervisor for Overseer.
//!
//! The supervisor is the central brain that:
//! 1. Holds the registry of capability-tagged agents
//! 2. Accepts tasks labeled with a required capability
//! 3. Selects an agent offering that capability and invokes it
//! 4. Wraps every outcome in a success/failure envelope
//!
//! # Architecture
//!
//! ```text
//! Task (capability + payload)
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   Supervisor    │ ◄── delegation protocol
//! │  (this crate)   │
//! └────────┬────────┘
//!          │ capability lookup
//!          ▼
//! ┌─────────────────┐
//! │  AgentRegistry  │  id → agent, capability → [ids]
//! └────────┬────────┘
//!          │ first match
//!          ▼
//!     agent.execute(task)
//! ```

pub mod config;
pub mod registry;
pub mod supervisor;

pub use config::{ServerConfig, SupervisorConfig};
pub use registry::{AgentRegistry, RegistryStatus};
pub use supervisor::{Supervisor, SupervisorStatus};
