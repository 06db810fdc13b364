//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod business_repo;
pub mod invoice_repo;

#[cfg(test)]
mod integration_tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

use crate::entity::{businesses, invoices};
use crate::error::DomainError;

pub use business_repo::PostgresBusinessRepository;
pub use invoice_repo::PostgresInvoiceRepository;

/// Create the `businesses` and `invoices` tables if they do not exist yet.
///
/// Runs once at startup; `businesses` must be created first so the invoice
/// foreign key resolves.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut businesses_table = schema.create_table_from_entity(businesses::Entity);
    businesses_table.if_not_exists();
    db.execute(backend.build(&businesses_table))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    let mut invoices_table = schema.create_table_from_entity(invoices::Entity);
    invoices_table.if_not_exists();
    db.execute(backend.build(&invoices_table))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(())
}
