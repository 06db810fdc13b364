//! Business domain entity
//!
//! Represents a registered business, uniquely identified by the wallet
//! address of its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::invoice::Invoice;

/// Unique identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub i64);

impl From<i64> for BusinessId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered business
#[derive(Debug, Clone, Serialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub owner_address: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to register a new business
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub owner_address: String,
}

/// A business together with its invoices, loaded via an explicit join
#[derive(Debug, Clone, Serialize)]
pub struct BusinessWithInvoices {
    pub business: Business,
    pub invoices: Vec<Invoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_id_display() {
        assert_eq!(BusinessId(42).to_string(), "42");
    }

    #[test]
    fn business_id_from_i64() {
        assert_eq!(BusinessId::from(7), BusinessId(7));
    }

    #[test]
    fn business_serializes_with_snake_case_fields() {
        let business = Business {
            id: BusinessId(1),
            name: "Acme".to_string(),
            owner_address: "0xabc".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&business).unwrap();
        assert_eq!(json["owner_address"], "0xabc");
    }
}
