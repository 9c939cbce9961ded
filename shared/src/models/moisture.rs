//! Soil moisture models

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Lowest accepted soil moisture reading (percent)
pub const MIN_MOISTURE_LEVEL: i32 = 0;
/// Highest accepted soil moisture reading (percent)
pub const MAX_MOISTURE_LEVEL: i32 = 100;
/// Initial slider position offered to the user
pub const DEFAULT_MOISTURE_LEVEL: i32 = 50;

/// Moisture bracket a reading falls into
///
/// Upper bounds are exclusive: 30 and 59 are `Moderate`, 60 is `Wet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoistureBand {
    /// Below 30%
    Dry,
    /// 30% up to (not including) 60%
    Moderate,
    /// 60% and above
    Wet,
}

impl MoistureBand {
    pub fn from_level(level: i32) -> Self {
        if level < 30 {
            MoistureBand::Dry
        } else if level < 60 {
            MoistureBand::Moderate
        } else {
            MoistureBand::Wet
        }
    }

    pub fn multiplier(&self) -> Decimal {
        match self {
            MoistureBand::Dry => dec!(1.2),
            MoistureBand::Moderate => dec!(1.0),
            MoistureBand::Wet => dec!(0.7),
        }
    }
}
