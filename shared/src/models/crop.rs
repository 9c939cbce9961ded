//! Crop models

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days from planting to harvest for a crop outside the table
pub const DEFAULT_CROP_DAYS: u32 = 100;

/// Crops supported by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Wheat,
    Corn,
    Rice,
    Tomato,
    Potato,
    Banana,
}

impl CropType {
    pub const ALL: [CropType; 6] = [
        CropType::Wheat,
        CropType::Corn,
        CropType::Rice,
        CropType::Tomato,
        CropType::Potato,
        CropType::Banana,
    ];

    /// Case-insensitive lookup. Returns None for crops outside the table.
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.to_lowercase();
        Self::ALL.into_iter().find(|crop| crop.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            CropType::Wheat => "wheat",
            CropType::Corn => "corn",
            CropType::Rice => "rice",
            CropType::Tomato => "tomato",
            CropType::Potato => "potato",
            CropType::Banana => "banana",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropType::Wheat => "Wheat",
            CropType::Corn => "Corn",
            CropType::Rice => "Rice",
            CropType::Tomato => "Tomato",
            CropType::Potato => "Potato",
            CropType::Banana => "Banana",
        }
    }

    /// Water demand multiplier relative to wheat
    pub fn multiplier(&self) -> Decimal {
        match self {
            CropType::Wheat => dec!(1.0),
            CropType::Corn => dec!(1.1),
            CropType::Rice => dec!(1.3),
            CropType::Tomato => dec!(1.2),
            CropType::Potato => dec!(1.0),
            CropType::Banana => dec!(1.5),
        }
    }

    /// Crop-days: fixed duration from planting to harvest
    pub fn days_to_harvest(&self) -> u32 {
        match self {
            CropType::Wheat => 120,
            CropType::Corn => 90,
            CropType::Rice => 150,
            CropType::Tomato => 80,
            CropType::Potato => 100,
            CropType::Banana => 180,
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(CropType::parse("Rice"), Some(CropType::Rice));
        assert_eq!(CropType::parse("BANANA"), Some(CropType::Banana));
        assert_eq!(CropType::parse("mango"), None);
    }

    #[test]
    fn test_days_to_harvest_table() {
        let days: Vec<u32> = CropType::ALL.iter().map(|c| c.days_to_harvest()).collect();
        assert_eq!(days, vec![120, 90, 150, 80, 100, 180]);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(CropType::Tomato.to_string(), "Tomato");
    }
}
