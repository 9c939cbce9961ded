//! Business logic services for the Smart Irrigation Assistant

pub mod advisor;
pub mod assistant;
pub mod chat;
pub mod session;

pub use advisor::{AdvisorService, FieldConditionsInput};
pub use assistant::AssistantService;
pub use chat::ChatService;
pub use session::SessionStore;
