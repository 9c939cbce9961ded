//! Weather condition models

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prevailing weather reported by the grower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Hot,
    Moderate,
    Cold,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 3] = [
        WeatherCondition::Hot,
        WeatherCondition::Moderate,
        WeatherCondition::Cold,
    ];

    /// Case-insensitive lookup. Returns None for conditions outside the table.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.to_lowercase();
        Self::ALL.into_iter().find(|weather| weather.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "hot",
            WeatherCondition::Moderate => "moderate",
            WeatherCondition::Cold => "cold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Hot => "Hot",
            WeatherCondition::Moderate => "Moderate",
            WeatherCondition::Cold => "Cold",
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            WeatherCondition::Hot => dec!(1.3),
            WeatherCondition::Moderate => dec!(1.0),
            WeatherCondition::Cold => dec!(0.8),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
