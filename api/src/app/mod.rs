//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod business_service;
pub mod invoice_service;

pub use business_service::BusinessService;
pub use invoice_service::InvoiceService;
