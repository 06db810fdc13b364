//! AI prediction service adapter
//!
//! Implementation of the prediction client port over HTTP.

pub mod client;

pub use client::HttpPredictionClient;
