//! Soil type models

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil texture class of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Peaty,
    Saline,
    Silty,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Clay,
        SoilType::Peaty,
        SoilType::Saline,
        SoilType::Silty,
    ];

    /// Case-insensitive lookup. Returns None for soils outside the table.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.to_lowercase();
        Self::ALL.into_iter().find(|soil| soil.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
            SoilType::Peaty => "peaty",
            SoilType::Saline => "saline",
            SoilType::Silty => "silty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Peaty => "Peaty",
            SoilType::Saline => "Saline",
            SoilType::Silty => "Silty",
        }
    }

    /// Water demand multiplier. Fast-draining soils need more water.
    pub fn multiplier(&self) -> Decimal {
        match self {
            SoilType::Sandy => dec!(1.5),
            SoilType::Loamy => dec!(1.0),
            SoilType::Clay => dec!(0.7),
            SoilType::Peaty => dec!(0.9),
            SoilType::Saline => dec!(1.2),
            SoilType::Silty => dec!(1.1),
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
