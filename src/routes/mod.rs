use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod main;
pub mod products;

/// Failure envelope carried by every error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
    message: String,
}

/// Build a failure response with the standard envelope.
pub(crate) fn failure(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        success: false,
        error,
        message: message.into(),
    })
}

/// Translate a service error into a status code and envelope.
///
/// `operation` names the attempted action for the opaque 500 message, e.g.
/// "fetching products".
pub(crate) fn service_error_response(err: ServiceError, operation: &str) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            failure(StatusCode::BAD_REQUEST, "Validation failed", message)
        }
        ServiceError::InvalidId(message) => {
            failure(StatusCode::BAD_REQUEST, "Invalid product ID format", message)
        }
        ServiceError::NotFound(message) => {
            failure(StatusCode::NOT_FOUND, "Product not found", message)
        }
        ServiceError::Conflict(message) => {
            failure(StatusCode::CONFLICT, "Duplicate entry", message)
        }
        ServiceError::Internal => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
            format!("Server error while {operation}"),
        ),
    }
}

/// JSON extractor configuration that keeps body parse failures inside the
/// standard envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = failure(
            StatusCode::BAD_REQUEST,
            "Invalid JSON",
            err.to_string(),
        );
        InternalError::from_response(err, response).into()
    })
}
