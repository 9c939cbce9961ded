//! Irrigation advisor: field estimates plus AI advice

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{estimate_field, CropType, FieldEstimate, SoilType, WeatherCondition};
use validator::Validate;

use super::AssistantService;
use crate::error::AppResult;

/// Field conditions entered on the form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FieldConditionsInput {
    pub soil: String,
    pub crop: String,
    pub weather: String,
    #[validate(range(min = 0, max = 100, message = "Soil moisture must be between 0 and 100%"))]
    pub moisture_level: i32,
    /// Planting date as `YYYY-MM-DD`
    pub planting_date: String,
}

/// Estimator output without AI advice
#[derive(Debug, Clone, Serialize)]
pub struct EstimateView {
    /// Recommended water per day in millimetres
    pub water_requirement_mm: Decimal,
    pub harvest_date: NaiveDate,
    pub days_to_harvest: u32,
    /// Inputs that were not found in their lookup table and counted as defaults
    pub defaulted_inputs: Vec<String>,
}

/// Full recommendation shown after the user submits the form
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub estimate: EstimateView,
    pub ai_advice: String,
}

/// Advisor service combining the estimator with the AI assistant
#[derive(Clone)]
pub struct AdvisorService {
    assistant: AssistantService,
}

impl AdvisorService {
    /// Create a new AdvisorService instance
    pub fn new(assistant: AssistantService) -> Self {
        Self { assistant }
    }

    /// Validate the inputs and compute water requirement and harvest date
    pub fn estimate(input: &FieldConditionsInput) -> AppResult<EstimateView> {
        input.validate()?;

        let defaulted_inputs = defaulted_inputs(input);
        for field in &defaulted_inputs {
            tracing::warn!(field = %field, "Input not in lookup table, using default");
        }

        let FieldEstimate {
            water_requirement_mm,
            harvest_date,
            days_to_harvest,
        } = estimate_field(
            &input.soil,
            &input.crop,
            &input.weather,
            input.moisture_level,
            &input.planting_date,
        )?;

        Ok(EstimateView {
            water_requirement_mm,
            harvest_date,
            days_to_harvest,
            defaulted_inputs,
        })
    }

    /// Compute the estimates, then ask the AI service for management advice
    pub async fn recommend(&self, input: &FieldConditionsInput) -> AppResult<Recommendation> {
        let estimate = Self::estimate(input)?;

        tracing::info!(
            soil = %input.soil,
            crop = %input.crop,
            weather = %input.weather,
            moisture_level = input.moisture_level,
            water_requirement_mm = %estimate.water_requirement_mm,
            "Requesting irrigation advice"
        );

        let ai_advice = self.assistant.ask(&build_advice_prompt(input)).await?;

        Ok(Recommendation {
            estimate,
            ai_advice,
        })
    }
}

/// Prompt asking the AI service how to manage irrigation and fertilizer
pub fn build_advice_prompt(input: &FieldConditionsInput) -> String {
    format!(
        "I am growing {} in {} soil. The weather is {} and the soil moisture is {}%. \
         How should I manage irrigation and fertilizer?",
        input.crop, input.soil, input.weather, input.moisture_level
    )
}

fn defaulted_inputs(input: &FieldConditionsInput) -> Vec<String> {
    let mut fields = Vec::new();
    if SoilType::parse(&input.soil).is_none() {
        fields.push("soil".to_string());
    }
    if CropType::parse(&input.crop).is_none() {
        fields.push("crop".to_string());
    }
    if WeatherCondition::parse(&input.weather).is_none() {
        fields.push("weather".to_string());
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::external::testing::MockGenerator;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn input(soil: &str, crop: &str, weather: &str, moisture: i32, date: &str) -> FieldConditionsInput {
        FieldConditionsInput {
            soil: soil.to_string(),
            crop: crop.to_string(),
            weather: weather.to_string(),
            moisture_level: moisture,
            planting_date: date.to_string(),
        }
    }

    #[test]
    fn test_advice_prompt_wording() {
        let prompt = build_advice_prompt(&input("Sandy", "Banana", "Hot", 50, "2025-03-21"));
        assert_eq!(
            prompt,
            "I am growing Banana in Sandy soil. The weather is Hot and the soil moisture is 50%. \
             How should I manage irrigation and fertilizer?"
        );
    }

    #[test]
    fn test_estimate_values() {
        let estimate = AdvisorService::estimate(&input("Sandy", "Banana", "Hot", 50, "2025-01-01")).unwrap();
        assert_eq!(estimate.water_requirement_mm, dec!(29.25));
        assert_eq!(estimate.harvest_date, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!(estimate.days_to_harvest, 180);
        assert!(estimate.defaulted_inputs.is_empty());
    }

    #[test]
    fn test_estimate_reports_defaulted_inputs() {
        let estimate = AdvisorService::estimate(&input("volcanic", "rice", "foggy", 50, "2025-01-01")).unwrap();
        assert_eq!(estimate.defaulted_inputs, vec!["soil".to_string(), "weather".to_string()]);
        assert_eq!(estimate.water_requirement_mm, dec!(13));
    }

    #[test]
    fn test_estimate_rejects_out_of_range_moisture() {
        let result = AdvisorService::estimate(&input("clay", "corn", "cold", 101, "2025-01-01"));
        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "moisture_level"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_estimate_rejects_bad_date() {
        let result = AdvisorService::estimate(&input("clay", "corn", "cold", 40, "21/03/2025"));
        assert!(matches!(result, Err(AppError::InvalidDate(_))));
    }

    #[tokio::test]
    async fn test_recommend_includes_ai_advice() {
        let mock = Arc::new(MockGenerator::replying("Drip irrigate every morning."));
        let advisor = AdvisorService::new(AssistantService::new(mock.clone()));

        let recommendation = advisor
            .recommend(&input("Loamy", "Wheat", "Moderate", 45, "2025-03-21"))
            .await
            .unwrap();

        assert_eq!(recommendation.ai_advice, "Drip irrigate every morning.");
        assert_eq!(recommendation.estimate.water_requirement_mm, dec!(10));
        assert_eq!(mock.prompts().len(), 1);
        assert!(mock.prompts()[0].starts_with("I am growing Wheat in Loamy soil."));
    }

    #[tokio::test]
    async fn test_recommend_skips_ai_on_invalid_input() {
        let mock = Arc::new(MockGenerator::replying("unused"));
        let advisor = AdvisorService::new(AssistantService::new(mock.clone()));

        let result = advisor
            .recommend(&input("Loamy", "Wheat", "Moderate", -5, "2025-03-21"))
            .await;

        assert!(result.is_err());
        assert!(mock.prompts().is_empty());
    }

    proptest! {
        #[test]
        fn prop_prompt_carries_inputs_verbatim(
            soil in "[A-Za-z ]{0,20}",
            crop in "[A-Za-z ]{0,20}",
            weather in "[A-Za-z ]{0,20}",
            moisture in 0i32..=100,
        ) {
            let prompt = build_advice_prompt(&input(&soil, &crop, &weather, moisture, "2025-01-01"));

            let opening = format!("I am growing {} in {} soil. ", crop, soil);
            let conditions = format!(
                "The weather is {} and the soil moisture is {}%. ",
                weather, moisture
            );
            prop_assert!(prompt.starts_with(&opening));
            prop_assert!(prompt.contains(&conditions));
            prop_assert!(prompt.ends_with("How should I manage irrigation and fertilizer?"));
        }

        #[test]
        fn prop_every_valid_moisture_level_is_estimated(moisture in 0i32..=100) {
            let estimate = AdvisorService::estimate(&input("Clay", "Rice", "Cold", moisture, "2025-01-01"));
            prop_assert!(estimate.is_ok());
            prop_assert!(estimate.unwrap().water_requirement_mm > Decimal::ZERO);
        }
    }
}
