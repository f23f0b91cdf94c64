//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: builds the shop service over the configured stores
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: form/query DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use chrono::{Local, NaiveDate};
use tower::ServiceBuilder;

use stockroom_infra::ShopConfig;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router over file-backed stores from `config`.
pub fn build_app(config: &ShopConfig) -> Router {
    build_app_with(Arc::new(services::build_services(config)))
}

/// Build the router over an already-constructed service.
pub fn build_app_with(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}

/// The shop's "today": the local calendar date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
