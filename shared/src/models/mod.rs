//! Domain models for the Smart Irrigation Assistant

mod chat;
mod crop;
mod moisture;
mod soil;
mod weather;

pub use chat::*;
pub use crop::*;
pub use moisture::*;
pub use soil::*;
pub use weather::*;

use rust_decimal::Decimal;

/// Multiplier used when a soil, crop, or weather input is not in its table
pub const FALLBACK_MULTIPLIER: Decimal = Decimal::ONE;
