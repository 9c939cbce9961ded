//! Irrigation estimate and recommendation HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use shared::FormOptions;

use super::AppJson;
use crate::services::{AdvisorService, FieldConditionsInput};
use crate::AppState;

/// Selectable soils, crops, weather, and the moisture slider range
pub async fn get_form_options() -> impl IntoResponse {
    (StatusCode::OK, Json(FormOptions::new()))
}

/// Water requirement and harvest date, without AI advice
pub async fn create_estimate(AppJson(input): AppJson<FieldConditionsInput>) -> impl IntoResponse {
    match AdvisorService::estimate(&input) {
        Ok(estimate) => (StatusCode::OK, Json(estimate)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Water requirement, harvest date, and AI advice for the submitted form
pub async fn create_recommendation(
    State(state): State<AppState>,
    AppJson(input): AppJson<FieldConditionsInput>,
) -> impl IntoResponse {
    let service = AdvisorService::new(state.assistant.clone());

    match service.recommend(&input).await {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(e) => e.into_response(),
    }
}
