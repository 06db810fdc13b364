//! HTTP client for the external AI prediction service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{CashflowPrediction, PredictionClient};
use crate::error::PredictionError;

/// Upstream calls are single-attempt with a fixed deadline; the caller gets
/// the failure rather than a retry.
const PREDICT_TIMEOUT: Duration = Duration::from_secs(30);

/// Implementation of the prediction client against the AI HTTP service
pub struct HttpPredictionClient {
    http: Client,
    base_url: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    historical_data: &'a [f64],
}

/// The AI service responds 2xx with either a result object or an error
/// payload carrying an `error` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictResponse {
    Error { error: String },
    Success(CashflowPrediction),
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(
        &self,
        historical_data: &[f64],
    ) -> Result<CashflowPrediction, PredictionError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&url)
            .timeout(PREDICT_TIMEOUT)
            .json(&PredictRequest { historical_data })
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    PredictionError::Unreachable {
                        url: self.base_url.clone(),
                    }
                } else {
                    PredictionError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PredictionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<PredictResponse>().await {
            Ok(PredictResponse::Success(prediction)) => Ok(prediction),
            Ok(PredictResponse::Error { error }) => {
                Err(PredictionError::Upstream { detail: error })
            }
            Err(e) => Err(PredictionError::Deserialization(e.to_string())),
        }
    }
}
