//! WebAssembly module for the Smart Irrigation Assistant
//!
//! Provides client-side computation for:
//! - Daily water requirement previews
//! - Harvest date previews
//! - Form option lists and input validation

use rust_decimal::prelude::ToPrimitive;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("smart-irrigation estimator loaded"));
}

/// Daily water requirement in mm; unknown categories count as 1.0
#[wasm_bindgen]
pub fn calculate_water_requirement(soil: &str, crop: &str, weather: &str, moisture_level: i32) -> f64 {
    shared::compute_water_requirement(soil, crop, weather, moisture_level)
        .to_f64()
        .unwrap_or(0.0)
}

/// Harvest date as `YYYY-MM-DD` for a `YYYY-MM-DD` planting date
#[wasm_bindgen]
pub fn calculate_harvest_date(crop: &str, planting_date: &str) -> Result<String, JsValue> {
    shared::compute_harvest_date(crop, planting_date)
        .map(|date| date.format(shared::PLANTING_DATE_FORMAT).to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Moisture multiplier for a slider position
#[wasm_bindgen]
pub fn moisture_factor(moisture_level: i32) -> f64 {
    shared::moisture_multiplier(moisture_level)
        .to_f64()
        .unwrap_or(1.0)
}

/// Check a slider value before submitting the form
#[wasm_bindgen]
pub fn is_valid_moisture_level(moisture_level: i32) -> bool {
    validate_moisture_level(moisture_level).is_ok()
}

/// Select options for the form, as JSON
#[wasm_bindgen]
pub fn form_options_json() -> Result<String, JsValue> {
    serde_json::to_string(&FormOptions::new())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize options: {}", e)))
}
