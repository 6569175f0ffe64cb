//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use blog_core::DomainError;
use blog_shared::ErrorResponse;
use validator::ValidationErrors;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{resource} not found with {field} : '{value}'")]
    NotFound {
        resource: String,
        field: String,
        value: String,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::ConstraintViolation(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound {
                resource,
                field,
                value,
            } => ErrorResponse::not_found(self.to_string()).with_resource(resource, field, value),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::ConstraintViolation(detail) => {
                ErrorResponse::new(400, "Constraint Violation").with_detail(detail)
            }
            AppError::Validation(errors) => {
                ErrorResponse::new(400, "Validation Failed").with_detail(errors.join(", "))
            }
            AppError::Internal(detail) => {
                // Log internal errors, never echo them
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound {
                resource,
                field,
                value,
            } => AppError::NotFound {
                resource: resource.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            },
            DomainError::InvalidRelationship(msg) => AppError::BadRequest(msg),
            DomainError::ConstraintViolation(msg) => AppError::ConstraintViolation(msg),
            DomainError::Validation(msg) => AppError::Validation(vec![msg]),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        messages.sort();

        AppError::Validation(messages)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Malformed or incomplete JSON bodies.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Unparseable query strings (e.g. a negative `pageNo`).
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Path segments that are not valid ids.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Fallback for requests no route matched.
pub async fn route_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound {
        resource: "Route".to_string(),
        field: "path".to_string(),
        value: req.path().to_string(),
    })
}
