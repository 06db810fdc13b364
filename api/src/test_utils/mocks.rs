//! Mock implementations of port traits
//!
//! In-memory repository implementations backed by a shared store. They can
//! be pre-populated with fixtures and emulate the owner-address uniqueness
//! constraint of the real database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Business, BusinessId, BusinessWithInvoices, Invoice, InvoiceId, NewBusiness, NewInvoice,
};
use crate::domain::ports::{BusinessRepository, InvoiceRepository};
use crate::error::DomainError;

#[derive(Default)]
struct Store {
    businesses: HashMap<i64, Business>,
    invoices: HashMap<i64, Invoice>,
    next_business_id: i64,
    next_invoice_id: i64,
}

/// Shared in-memory storage backing the mock repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Store>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn business_repo(&self) -> InMemoryBusinessRepository {
        InMemoryBusinessRepository {
            store: self.clone(),
        }
    }

    pub fn invoice_repo(&self) -> InMemoryInvoiceRepository {
        InMemoryInvoiceRepository {
            store: self.clone(),
        }
    }

    /// Pre-populate with a business for testing
    pub fn with_business(self, business: Business) -> Self {
        {
            let mut store = self.inner.write().unwrap();
            store.next_business_id = store.next_business_id.max(business.id.0);
            store.businesses.insert(business.id.0, business);
        }
        self
    }

    /// Pre-populate with an invoice for testing
    pub fn with_invoice(self, invoice: Invoice) -> Self {
        {
            let mut store = self.inner.write().unwrap();
            store.next_invoice_id = store.next_invoice_id.max(invoice.id.0);
            store.invoices.insert(invoice.id.0, invoice);
        }
        self
    }
}

// ============================================================================
// In-Memory Business Repository
// ============================================================================

pub struct InMemoryBusinessRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let store = self.store.inner.read().unwrap();
        Ok(store.businesses.get(&id.0).cloned())
    }

    async fn find_by_owner_address(&self, address: &str) -> Result<Option<Business>, DomainError> {
        let store = self.store.inner.read().unwrap();
        Ok(store
            .businesses
            .values()
            .find(|b| b.owner_address == address)
            .cloned())
    }

    async fn find_all_with_invoices(&self) -> Result<Vec<BusinessWithInvoices>, DomainError> {
        let store = self.store.inner.read().unwrap();
        Ok(store
            .businesses
            .values()
            .map(|b| BusinessWithInvoices {
                business: b.clone(),
                invoices: store
                    .invoices
                    .values()
                    .filter(|i| i.business_id == b.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn find_by_address_with_invoices(
        &self,
        address: &str,
    ) -> Result<Option<BusinessWithInvoices>, DomainError> {
        let store = self.store.inner.read().unwrap();
        Ok(store
            .businesses
            .values()
            .find(|b| b.owner_address == address)
            .map(|b| BusinessWithInvoices {
                business: b.clone(),
                invoices: store
                    .invoices
                    .values()
                    .filter(|i| i.business_id == b.id)
                    .cloned()
                    .collect(),
            }))
    }

    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError> {
        let mut store = self.store.inner.write().unwrap();

        // Emulates the unique index on owner_address.
        if store
            .businesses
            .values()
            .any(|b| b.owner_address == business.owner_address)
        {
            return Err(DomainError::Conflict(format!(
                "duplicate key value for owner address {}",
                business.owner_address
            )));
        }

        store.next_business_id += 1;
        let created = Business {
            id: BusinessId(store.next_business_id),
            name: business.name.clone(),
            owner_address: business.owner_address.clone(),
            created_at: Utc::now(),
        };
        store.businesses.insert(created.id.0, created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Invoice Repository
// ============================================================================

pub struct InMemoryInvoiceRepository {
    store: InMemoryStore,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn find_by_business(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<Invoice>, DomainError> {
        let store = self.store.inner.read().unwrap();
        Ok(store
            .invoices
            .values()
            .filter(|i| i.business_id == *business_id)
            .cloned()
            .collect())
    }

    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, DomainError> {
        let mut store = self.store.inner.write().unwrap();

        store.next_invoice_id += 1;
        let created = Invoice {
            id: InvoiceId(store.next_invoice_id),
            amount: invoice.amount,
            due_date: invoice.due_date,
            is_paid: false,
            token_uri: invoice.token_uri.clone(),
            business_id: invoice.business_id,
            created_at: Utc::now(),
        };
        store.invoices.insert(created.id.0, created.clone());
        Ok(created)
    }
}
