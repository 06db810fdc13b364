//! Invoice service
//!
//! Handles invoice creation for registered businesses.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::entities::{BusinessId, Invoice, NewInvoice};
use crate::domain::ports::{BusinessRepository, InvoiceRepository};
use crate::error::{AppError, DomainError};

/// Service for creating invoices
pub struct InvoiceService<IR, BR>
where
    IR: InvoiceRepository,
    BR: BusinessRepository,
{
    invoices: Arc<IR>,
    businesses: Arc<BR>,
}

impl<IR, BR> InvoiceService<IR, BR>
where
    IR: InvoiceRepository,
    BR: BusinessRepository,
{
    pub fn new(invoices: Arc<IR>, businesses: Arc<BR>) -> Self {
        Self {
            invoices,
            businesses,
        }
    }

    /// Create an invoice for a business.
    ///
    /// The business must exist; invoices start unpaid and stay that way
    /// until a payment is confirmed out-of-band.
    pub async fn create(
        &self,
        business_id: i64,
        amount: i64,
        due_date: &str,
        token_uri: Option<String>,
    ) -> Result<Invoice, AppError> {
        let due_date = parse_due_date(due_date).map_err(|_| {
            AppError::Domain(DomainError::Validation(format!(
                "Invalid dueDate '{}': expected an ISO-8601 date or date-time",
                due_date
            )))
        })?;

        let business_id = BusinessId(business_id);
        if self.businesses.find_by_id(&business_id).await?.is_none() {
            return Err(AppError::Domain(DomainError::NotFound(format!(
                "Business {} not found",
                business_id
            ))));
        }

        let new_invoice = NewInvoice {
            business_id,
            amount,
            due_date,
            token_uri,
        };

        Ok(self.invoices.create(&new_invoice).await?)
    }
}

/// Parse an ISO-8601 due date: a full RFC 3339 date-time, or a bare
/// `YYYY-MM-DD` date interpreted as UTC midnight.
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    raw.parse::<NaiveDate>()
        .map(|d| DateTime::from_naive_utc_and_offset(d.and_time(NaiveTime::MIN), Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_bare_date_as_utc_midnight() {
        let dt = parse_due_date("2026-01-15").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 1, 15));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn parses_rfc3339_date_time() {
        let dt = parse_due_date("2026-01-15T12:30:00Z").unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_offset_date_time_to_utc() {
        let dt = parse_due_date("2026-01-15T00:00:00+02:00").unwrap();
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 22);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_due_date("not-a-date").is_err());
        assert!(parse_due_date("").is_err());
        assert!(parse_due_date("15/01/2026").is_err());
    }
}
