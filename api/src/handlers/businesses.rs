//! Business handlers
//!
//! Endpoints for registering and querying businesses.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::invoices::InvoiceResponse;
use crate::domain::entities::{Business, BusinessWithInvoices};
use crate::error::AppError;
use crate::AppState;

/// Request to register a new business.
///
/// Fields default to empty so that missing keys reach the service's
/// validation (and its 400 message) instead of being rejected by the
/// extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBusinessRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner_address: String,
}

/// A business as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub owner_address: String,
    pub created_at: String,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        BusinessResponse {
            id: business.id.0,
            name: business.name,
            owner_address: business.owner_address,
            created_at: business.created_at.to_rfc3339(),
        }
    }
}

/// A business with its invoices, as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessWithInvoicesResponse {
    pub id: i64,
    pub name: String,
    pub owner_address: String,
    pub created_at: String,
    pub invoices: Vec<InvoiceResponse>,
}

impl From<BusinessWithInvoices> for BusinessWithInvoicesResponse {
    fn from(loaded: BusinessWithInvoices) -> Self {
        BusinessWithInvoicesResponse {
            id: loaded.business.id.0,
            name: loaded.business.name,
            owner_address: loaded.business.owner_address,
            created_at: loaded.business.created_at.to_rfc3339(),
            invoices: loaded.invoices.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /api/business
///
/// List all businesses with their invoices.
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Vec<BusinessWithInvoicesResponse>>, AppError> {
    let businesses = state.business_service.list_all().await?;

    Ok(Json(businesses.into_iter().map(Into::into).collect()))
}

/// POST /api/business
///
/// Register a new business for an owner address.
pub async fn register_business(
    State(state): State<AppState>,
    Json(request): Json<RegisterBusinessRequest>,
) -> Result<(StatusCode, Json<BusinessResponse>), AppError> {
    let business = state
        .business_service
        .register(&request.name, &request.owner_address)
        .await?;

    Ok((StatusCode::CREATED, Json(business.into())))
}

/// GET /api/business/:address
///
/// Get the business registered for an owner address, with its invoices.
pub async fn get_business_by_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BusinessWithInvoicesResponse>, AppError> {
    let loaded = state.business_service.get_by_address(&address).await?;

    Ok(Json(loaded.into()))
}
