//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod prediction;
pub mod repositories;

pub use prediction::{CashflowPrediction, PredictionClient};
pub use repositories::{BusinessRepository, InvoiceRepository};
