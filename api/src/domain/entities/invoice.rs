//! Invoice domain entity
//!
//! A payable obligation belonging to a business. Amounts are integer minor
//! units; `is_paid` starts false and is only flipped out-of-band (on-chain
//! payment confirmation), never by this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::business::BusinessId;

/// Unique identifier for an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub i64);

impl From<i64> for InvoiceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An invoice owed to a business
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub is_paid: bool,
    pub token_uri: Option<String>,
    pub business_id: BusinessId,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new invoice
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub business_id: BusinessId,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub token_uri: Option<String>,
}
