use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};

use stockroom_core::DomainError;
use stockroom_infra::ServiceError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let draft = match form.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.add_item(draft) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Current values of the item to edit. Unknown names go back to the main page.
pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.get_item(&name) {
        Ok(Some(item)) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Full replacement, including the name. Unknown names go back to the main page.
pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    Form(form): Form<dto::ItemForm>,
) -> axum::response::Response {
    let draft = match form.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.edit_item(&name, draft) {
        Ok(_) | Err(ServiceError::Domain(DomainError::NotFound(_))) => {
            Redirect::to("/").into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Confirmation step: describes what a confirmed delete would remove.
pub async fn confirm_delete(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.get_item(&name) {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "item": dto::item_to_json(&item),
                "confirm": {
                    "method": "POST",
                    "path": format!("/delete/{}", urlencoding::encode(item.name().as_str())),
                    "field": "confirm",
                    "value": "yes",
                },
            })),
        )
            .into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Delete every item matching `name`, only once `confirm=yes` is sent.
///
/// A missing or unreadable body counts as unconfirmed.
pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    form: Option<Form<dto::DeleteForm>>,
) -> axum::response::Response {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    if !form.is_confirmed() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "confirmation_required",
            format!("send confirm=yes to delete '{name}'"),
        );
    }

    match services.delete_item(&name) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
