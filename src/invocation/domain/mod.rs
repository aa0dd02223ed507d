//! Domain model for agent invocation.

mod event;
mod ids;
mod response;

pub use event::{CompletionEvent, InvocationRequest};
pub use ids::SessionId;
pub use response::AgentResponse;
