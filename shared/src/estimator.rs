//! Irrigation and harvest estimator
//!
//! Pure lookup-table arithmetic:
//! - Daily water requirement from soil, crop, weather, and soil moisture
//! - Harvest date from crop and planting date
//!
//! Category inputs are matched case-insensitively. A category missing from
//! its table contributes `FALLBACK_MULTIPLIER` (water) or
//! `DEFAULT_CROP_DAYS` (harvest) instead of failing.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};
use crate::models::{
    CropType, MoistureBand, SoilType, WeatherCondition, DEFAULT_CROP_DAYS, FALLBACK_MULTIPLIER,
};

/// Base daily water quantity in millimetres, before multipliers
pub const BASE_WATER_MM: Decimal = Decimal::TEN;

/// Date format accepted for planting dates
pub const PLANTING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Combined estimator output for one set of field conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEstimate {
    /// Recommended water per day in millimetres
    pub water_requirement_mm: Decimal,
    pub harvest_date: NaiveDate,
    pub days_to_harvest: u32,
}

pub fn soil_multiplier(soil: Option<SoilType>) -> Decimal {
    soil.map(|s| s.multiplier()).unwrap_or(FALLBACK_MULTIPLIER)
}

pub fn crop_multiplier(crop: Option<CropType>) -> Decimal {
    crop.map(|c| c.multiplier()).unwrap_or(FALLBACK_MULTIPLIER)
}

pub fn weather_multiplier(weather: Option<WeatherCondition>) -> Decimal {
    weather.map(|w| w.multiplier()).unwrap_or(FALLBACK_MULTIPLIER)
}

/// Multiplier for a soil moisture percentage (<30 → 1.2, <60 → 1.0, else 0.7)
pub fn moisture_multiplier(level: i32) -> Decimal {
    MoistureBand::from_level(level).multiplier()
}

pub fn crop_days(crop: Option<CropType>) -> u32 {
    crop.map(|c| c.days_to_harvest()).unwrap_or(DEFAULT_CROP_DAYS)
}

/// Water requirement in mm/day from already-parsed categories
pub fn water_requirement(
    soil: Option<SoilType>,
    crop: Option<CropType>,
    weather: Option<WeatherCondition>,
    moisture_level: i32,
) -> Decimal {
    let raw = soil_multiplier(soil)
        * crop_multiplier(crop)
        * weather_multiplier(weather)
        * moisture_multiplier(moisture_level)
        * BASE_WATER_MM;

    raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Water requirement in mm/day from free-text categories
///
/// Never fails: unrecognised soil, crop, or weather strings count as 1.0.
pub fn compute_water_requirement(soil: &str, crop: &str, weather: &str, moisture_level: i32) -> Decimal {
    water_requirement(
        SoilType::parse(soil),
        CropType::parse(crop),
        WeatherCondition::parse(weather),
        moisture_level,
    )
}

/// Parse a `YYYY-MM-DD` planting date
pub fn parse_planting_date(input: &str) -> EstimateResult<NaiveDate> {
    NaiveDate::parse_from_str(input, PLANTING_DATE_FORMAT).map_err(|e| EstimateError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Harvest date for an already-parsed crop
pub fn harvest_date(crop: Option<CropType>, planting_date: NaiveDate) -> EstimateResult<NaiveDate> {
    let days = crop_days(crop);
    planting_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| EstimateError::DateOutOfRange {
            planting_date: planting_date.to_string(),
            days,
        })
}

/// Harvest date from a free-text crop and a `YYYY-MM-DD` planting date
pub fn compute_harvest_date(crop: &str, planting_date: &str) -> EstimateResult<NaiveDate> {
    let planted = parse_planting_date(planting_date)?;
    harvest_date(CropType::parse(crop), planted)
}

/// Run both estimates for one set of field conditions
pub fn estimate_field(
    soil: &str,
    crop: &str,
    weather: &str,
    moisture_level: i32,
    planting_date: &str,
) -> EstimateResult<FieldEstimate> {
    let crop_type = CropType::parse(crop);
    let planted = parse_planting_date(planting_date)?;

    Ok(FieldEstimate {
        water_requirement_mm: compute_water_requirement(soil, crop, weather, moisture_level),
        harvest_date: harvest_date(crop_type, planted)?,
        days_to_harvest: crop_days(crop_type),
    })
}
