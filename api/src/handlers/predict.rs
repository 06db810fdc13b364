//! AI prediction handler
//!
//! Proxies cash-flow forecasting requests to the external AI service.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::domain::ports::{CashflowPrediction, PredictionClient};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// POST /api/ai/predict
///
/// Forward a historical series to the AI service and return its forecast
/// unchanged. The request shape is validated here, before any outbound call.
pub async fn predict_cashflow(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CashflowPrediction>, AppError> {
    let historical_data = parse_historical_data(&body)?;

    let prediction = state.prediction.predict(&historical_data).await?;

    Ok(Json(prediction))
}

/// Extract `historical_data` as a numeric series
fn parse_historical_data(body: &Value) -> Result<Vec<f64>, AppError> {
    let values = body
        .get("historical_data")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::Domain(DomainError::Validation(
                "historical_data is required and must be an array".to_string(),
            ))
        })?;

    values
        .iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| {
                AppError::Domain(DomainError::Validation(
                    "historical_data must contain only numbers".to_string(),
                ))
            })
        })
        .collect()
}
