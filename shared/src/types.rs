//! Common types used across the assistant

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CropType, SoilType, WeatherCondition, DEFAULT_MOISTURE_LEVEL, MAX_MOISTURE_LEVEL,
    MIN_MOISTURE_LEVEL,
};

/// One selectable value of a categorical input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
    pub multiplier: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_harvest: Option<u32>,
}

/// Slider bounds for the soil moisture input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoistureRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl Default for MoistureRange {
    fn default() -> Self {
        Self {
            min: MIN_MOISTURE_LEVEL,
            max: MAX_MOISTURE_LEVEL,
            default: DEFAULT_MOISTURE_LEVEL,
        }
    }
}

/// Everything a form needs to render its input widgets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormOptions {
    pub soils: Vec<CategoryOption>,
    pub crops: Vec<CategoryOption>,
    pub weather: Vec<CategoryOption>,
    pub moisture: MoistureRange,
}

impl FormOptions {
    pub fn new() -> Self {
        let soils = SoilType::ALL
            .iter()
            .map(|s| CategoryOption {
                key: s.key().to_string(),
                label: s.label().to_string(),
                multiplier: s.multiplier(),
                days_to_harvest: None,
            })
            .collect();

        let crops = CropType::ALL
            .iter()
            .map(|c| CategoryOption {
                key: c.key().to_string(),
                label: c.label().to_string(),
                multiplier: c.multiplier(),
                days_to_harvest: Some(c.days_to_harvest()),
            })
            .collect();

        let weather = WeatherCondition::ALL
            .iter()
            .map(|w| CategoryOption {
                key: w.key().to_string(),
                label: w.label().to_string(),
                multiplier: w.multiplier(),
                days_to_harvest: None,
            })
            .collect();

        Self {
            soils,
            crops,
            weather,
            moisture: MoistureRange::default(),
        }
    }
}

impl Default for FormOptions {
    fn default() -> Self {
        Self::new()
    }
}
