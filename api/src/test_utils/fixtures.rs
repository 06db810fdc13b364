//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};

use crate::domain::entities::{Business, BusinessId, Invoice, InvoiceId};

/// Create a test business with a given id and owner address
pub fn test_business(id: i64, owner_address: &str) -> Business {
    Business {
        id: BusinessId(id),
        name: format!("business-{}", id),
        owner_address: owner_address.to_string(),
        created_at: Utc::now(),
    }
}

/// Create a test invoice with a given id, due in 30 days
pub fn test_invoice(id: i64, business_id: BusinessId) -> Invoice {
    Invoice {
        id: InvoiceId(id),
        amount: 500,
        due_date: Utc::now() + Duration::days(30),
        is_paid: false,
        token_uri: None,
        business_id,
        created_at: Utc::now(),
    }
}
