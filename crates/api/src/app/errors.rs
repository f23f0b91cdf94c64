use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::ServiceError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
