//! PostgreSQL adapter for InvoiceRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::entities::{BusinessId, Invoice, InvoiceId, NewInvoice};
use crate::domain::ports::InvoiceRepository;
use crate::entity::invoices;
use crate::error::DomainError;

/// PostgreSQL implementation of InvoiceRepository
pub struct PostgresInvoiceRepository {
    db: DatabaseConnection,
}

impl PostgresInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn find_by_business(
        &self,
        business_id: &BusinessId,
    ) -> Result<Vec<Invoice>, DomainError> {
        let results = invoices::Entity::find()
            .filter(invoices::Column::BusinessId.eq(business_id.0))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = invoices::ActiveModel {
            amount: Set(invoice.amount),
            due_date: Set(invoice.due_date.fixed_offset()),
            is_paid: Set(false),
            token_uri: Set(invoice.token_uri.clone()),
            business_id: Set(invoice.business_id.0),
            created_at: Set(Some(now)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<invoices::Model> for Invoice {
    fn from(model: invoices::Model) -> Self {
        Invoice {
            id: InvoiceId(model.id),
            amount: model.amount,
            due_date: model.due_date.with_timezone(&Utc),
            is_paid: model.is_paid,
            token_uri: model.token_uri,
            business_id: BusinessId(model.business_id),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
