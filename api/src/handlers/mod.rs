//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod businesses;
pub mod invoices;
pub mod predict;

pub use businesses::{get_business_by_address, list_businesses, register_business};
pub use invoices::create_invoice;
pub use predict::predict_cashflow;
