//! PostgreSQL adapter for BusinessRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use crate::domain::entities::{Business, BusinessId, BusinessWithInvoices, NewBusiness};
use crate::domain::ports::BusinessRepository;
use crate::entity::{businesses, invoices};
use crate::error::DomainError;

/// PostgreSQL implementation of BusinessRepository
pub struct PostgresBusinessRepository {
    db: DatabaseConnection,
}

impl PostgresBusinessRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for PostgresBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let result = businesses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_owner_address(&self, address: &str) -> Result<Option<Business>, DomainError> {
        let result = businesses::Entity::find()
            .filter(businesses::Column::OwnerAddress.eq(address))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all_with_invoices(&self) -> Result<Vec<BusinessWithInvoices>, DomainError> {
        let results = businesses::Entity::find()
            .find_with_related(invoices::Entity)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|(business, invoices)| BusinessWithInvoices {
                business: business.into(),
                invoices: invoices.into_iter().map(|m| m.into()).collect(),
            })
            .collect())
    }

    async fn find_by_address_with_invoices(
        &self,
        address: &str,
    ) -> Result<Option<BusinessWithInvoices>, DomainError> {
        let results = businesses::Entity::find()
            .filter(businesses::Column::OwnerAddress.eq(address))
            .find_with_related(invoices::Entity)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .next()
            .map(|(business, invoices)| BusinessWithInvoices {
                business: business.into(),
                invoices: invoices.into_iter().map(|m| m.into()).collect(),
            }))
    }

    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = businesses::ActiveModel {
            name: Set(business.name.clone()),
            owner_address: Set(business.owner_address.clone()),
            created_at: Set(Some(now)),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                // The unique index on owner_address serializes concurrent
                // registrations for the same address.
                Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
                _ => DomainError::Database(e.to_string()),
            }
        })?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<businesses::Model> for Business {
    fn from(model: businesses::Model) -> Self {
        Business {
            id: BusinessId(model.id),
            name: model.name,
            owner_address: model.owner_address,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
