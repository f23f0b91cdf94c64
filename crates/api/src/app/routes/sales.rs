use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};

use stockroom_sales::{SellItem, SellOutcome};

use crate::app::services::AppServices;
use crate::app::{dto, errors, today};

/// Response header naming what a sell attempt did.
pub const SELL_OUTCOME_HEADER: &str = "x-sell-outcome";
/// Stock on hand, sent alongside `insufficient_stock`.
pub const SELL_AVAILABLE_HEADER: &str = "x-sell-available";

/// Sell against stock, then go back to the main page whatever happened.
///
/// The redirect looks the same for every outcome; the headers say which one it was.
pub async fn sell(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::SellForm>,
) -> axum::response::Response {
    let quantity = match form.quantity() {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let cmd = SellItem {
        name: form.name,
        quantity,
        occurred_on: today(),
    };

    match services.sell(cmd) {
        Ok(SellOutcome::InsufficientStock { available }) => (
            [
                (SELL_OUTCOME_HEADER, "insufficient_stock".to_string()),
                (SELL_AVAILABLE_HEADER, available.to_string()),
            ],
            Redirect::to("/"),
        )
            .into_response(),
        Ok(outcome) => (
            [(SELL_OUTCOME_HEADER, outcome.code())],
            Redirect::to("/"),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Aggregated profit for `?date=YYYY-MM-DD`, defaulting to today.
pub async fn profit(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProfitQuery>,
) -> axum::response::Response {
    let date = match query.date_or(today()) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.profit_on(date) {
        Ok(total) => (StatusCode::OK, Json(dto::profit_to_json(date, total))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
