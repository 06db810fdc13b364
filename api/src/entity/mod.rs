//! SeaORM table models
//!
//! Database-facing models for the `businesses` and `invoices` tables.
//! Domain conversions live with the repository adapters.

pub mod businesses;
pub mod invoices;
