//! Shared types and models for the Smart Irrigation Assistant
//!
//! This crate contains the irrigation estimator and the chat session log,
//! shared between the backend, the browser (via WASM), and tests.

pub mod error;
pub mod estimator;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use estimator::*;
pub use models::*;
pub use types::*;
pub use validation::*;
