use axum::{
    Router,
    routing::{get, post},
};

pub mod dashboard;
pub mod inventory;
pub mod sales;
pub mod system;

/// Router for the shop endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/add", post(inventory::add_item))
        .route("/edit/:name", get(inventory::edit_form).post(inventory::edit_item))
        .route("/delete/:name", get(inventory::confirm_delete).post(inventory::delete_item))
        .route("/sell", post(sales::sell))
        .route("/profit", get(sales::profit))
}
