//! Domain model for the agent registry.
//!
//! Models registered agents, their routing aliases, and the lifecycle status
//! reported by the hosting service. All infrastructure concerns are kept
//! outside the domain boundary.

mod agent;
mod alias;
mod error;
mod ids;
mod snapshot;
mod status;

pub use agent::{AgentDetail, AgentRecord};
pub use alias::{AliasRecord, resolve_default_alias};
pub use error::RegistryDomainError;
pub use ids::{AgentId, AliasId};
pub use snapshot::{AgentLoadFailure, RegistrySnapshot};
pub use status::AgentStatus;
