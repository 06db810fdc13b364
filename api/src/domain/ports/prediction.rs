//! AI prediction client port trait
//!
//! Defines the interface for the external cash-flow forecasting service.
//! The model behind it is opaque; only the request/response contract matters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Forecast result returned by the AI service, passed through unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowPrediction {
    pub predicted_cashflow: f64,
    pub confidence: f64,
    pub input_data: Vec<f64>,
    pub data_points: i64,
    pub status: String,
}

/// Client for the external AI prediction service
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Request a forecast for the next period given a historical series.
    ///
    /// Single attempt, fail-fast: no retries are performed.
    async fn predict(&self, historical_data: &[f64])
        -> Result<CashflowPrediction, PredictionError>;
}
