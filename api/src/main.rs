//! MantleFlow API Server
//!
//! REST backend for an invoice-financing dApp: business and invoice
//! registration over PostgreSQL, plus a proxied AI cash-flow prediction
//! endpoint. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpPredictionClient, PostgresBusinessRepository, PostgresInvoiceRepository};
use app::{BusinessService, InvoiceService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub business_service: Arc<BusinessService<PostgresBusinessRepository>>,
    pub invoice_service:
        Arc<InvoiceService<PostgresInvoiceRepository, PostgresBusinessRepository>>,
    pub prediction: Arc<HttpPredictionClient>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[derive(Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "MantleFlow backend is running!",
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mantleflow_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MantleFlow API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL and make sure the tables exist
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    adapters::postgres::sync_schema(&db)
        .await
        .expect("Failed to sync database schema");
    tracing::info!("Database synchronized");

    // Create adapters
    let business_repo = Arc::new(PostgresBusinessRepository::new(db.clone()));
    let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db.clone()));
    let prediction = Arc::new(HttpPredictionClient::new(config.ai_server_url.clone()));

    // Create application services
    let business_service = Arc::new(BusinessService::new(business_repo.clone()));
    let invoice_service = Arc::new(InvoiceService::new(
        invoice_repo.clone(),
        business_repo.clone(),
    ));

    let state = AppState {
        business_service,
        invoice_service,
        prediction,
    };

    // Build router
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/api/business",
            get(handlers::list_businesses).post(handlers::register_business),
        )
        .route(
            "/api/business/:address",
            get(handlers::get_business_by_address),
        )
        .route("/api/invoice", post(handlers::create_invoice))
        .route("/api/ai/predict", post(handlers::predict_cashflow))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
