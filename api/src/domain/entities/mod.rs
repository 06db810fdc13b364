//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod business;
pub mod invoice;

pub use business::{Business, BusinessId, BusinessWithInvoices, NewBusiness};
pub use invoice::{Invoice, InvoiceId, NewInvoice};
