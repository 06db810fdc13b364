//! Business service
//!
//! Handles business registration and lookups.

use std::sync::Arc;

use crate::domain::entities::{Business, BusinessWithInvoices, NewBusiness};
use crate::domain::ports::BusinessRepository;
use crate::error::{AppError, DomainError};

/// Service for registering and querying businesses
pub struct BusinessService<BR>
where
    BR: BusinessRepository,
{
    businesses: Arc<BR>,
}

impl<BR> BusinessService<BR>
where
    BR: BusinessRepository,
{
    pub fn new(businesses: Arc<BR>) -> Self {
        Self { businesses }
    }

    /// Register a new business for an owner address.
    ///
    /// At most one business may exist per owner address. The pre-check below
    /// catches the common case; a concurrent registration racing past it is
    /// caught by the storage uniqueness constraint and normalized to the
    /// same conflict.
    pub async fn register(&self, name: &str, owner_address: &str) -> Result<Business, AppError> {
        if name.trim().is_empty() || owner_address.trim().is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "Name and ownerAddress are required".to_string(),
            )));
        }

        if self
            .businesses
            .find_by_owner_address(owner_address)
            .await?
            .is_some()
        {
            return Err(AppError::Domain(DomainError::Conflict(
                "Business already registered for this address".to_string(),
            )));
        }

        let new_business = NewBusiness {
            name: name.to_string(),
            owner_address: owner_address.to_string(),
        };

        match self.businesses.create(&new_business).await {
            Ok(business) => Ok(business),
            Err(DomainError::Conflict(_)) => Err(AppError::Domain(DomainError::Conflict(
                "Business already registered for this address".to_string(),
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// All businesses with their invoices
    pub async fn list_all(&self) -> Result<Vec<BusinessWithInvoices>, AppError> {
        Ok(self.businesses.find_all_with_invoices().await?)
    }

    /// The business registered for `address`, with its invoices
    pub async fn get_by_address(&self, address: &str) -> Result<BusinessWithInvoices, AppError> {
        self.businesses
            .find_by_address_with_invoices(address)
            .await?
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound("Business not found".to_string()))
            })
    }
}
