//! Invoice handlers
//!
//! Endpoint for creating invoices.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Invoice;
use crate::error::AppError;
use crate::AppState;

/// Request to create a new invoice
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub business_id: i64,
    /// Integer minor units
    pub amount: i64,
    /// ISO-8601 date or date-time
    pub due_date: String,
    #[serde(rename = "tokenURI", default)]
    pub token_uri: Option<String>,
}

/// An invoice as returned to clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: i64,
    pub amount: i64,
    pub due_date: String,
    pub is_paid: bool,
    #[serde(rename = "tokenURI")]
    pub token_uri: Option<String>,
    pub business_id: i64,
    pub created_at: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        InvoiceResponse {
            id: invoice.id.0,
            amount: invoice.amount,
            due_date: invoice.due_date.to_rfc3339(),
            is_paid: invoice.is_paid,
            token_uri: invoice.token_uri,
            business_id: invoice.business_id.0,
            created_at: invoice.created_at.to_rfc3339(),
        }
    }
}

/// POST /api/invoice
///
/// Create an invoice for a registered business.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse>), AppError> {
    let invoice = state
        .invoice_service
        .create(
            request.business_id,
            request.amount,
            &request.due_date,
            request.token_uri,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(invoice.into())))
}
