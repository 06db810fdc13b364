//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Business, BusinessId, BusinessWithInvoices, Invoice, NewBusiness, NewInvoice,
};
use crate::error::DomainError;

/// Repository for Business entities
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by ID
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError>;

    /// Find a business by its owner address
    async fn find_by_owner_address(&self, address: &str) -> Result<Option<Business>, DomainError>;

    /// All businesses with their invoices, loaded via an explicit join.
    /// No defined sort beyond storage order.
    async fn find_all_with_invoices(&self) -> Result<Vec<BusinessWithInvoices>, DomainError>;

    /// One business (by owner address) with its invoices
    async fn find_by_address_with_invoices(
        &self,
        address: &str,
    ) -> Result<Option<BusinessWithInvoices>, DomainError>;

    /// Create a new business.
    ///
    /// A uniqueness violation on the owner address surfaces as
    /// `DomainError::Conflict`, so concurrent registrations racing past the
    /// service pre-check still resolve to a conflict.
    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError>;
}

/// Repository for Invoice entities
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Find invoices belonging to a business
    async fn find_by_business(&self, business_id: &BusinessId)
        -> Result<Vec<Invoice>, DomainError>;

    /// Create a new invoice
    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, DomainError>;
}
