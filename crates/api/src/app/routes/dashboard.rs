use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors, today};

/// Items, low-stock alerts and today's performance.
pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.dashboard(today()) {
        Ok(dash) => (StatusCode::OK, Json(dto::dashboard_to_json(&dash))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
