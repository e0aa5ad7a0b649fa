use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Field name to list of human readable messages, rendered as the 400 body.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unsupported Media Type: {0}")]
    UnsupportedMediaType(String),
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed: {method}")]
    MethodNotAllowed { method: String, allow: &'static str },
    #[error("Database Error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Errors that abort the process before the server starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{0} must be set")]
    MissingVar(&'static str),
    #[error("{key} is invalid: {reason}")]
    InvalidVar { key: &'static str, reason: String },
    #[error("Failed to connect to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl AppError {
    pub fn field(field: &str, err: ValidationError) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message_for(&err)]);
        AppError::Validation(errors)
    }
}

fn message_for(err: &ValidationError) -> String {
    match (&err.message, &*err.code) {
        (Some(message), _) => message.to_string(),
        (None, "required") => "This field is required.".to_string(),
        (None, code) => format!("Invalid value ({}).", code),
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let errors = err
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.iter().map(message_for).collect()))
            .collect();
        AppError::Validation(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => HttpResponse::BadRequest().json(errors),
            AppError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ErrorResponse { detail: msg.clone() })
            }
            AppError::UnsupportedMediaType(msg) => {
                HttpResponse::UnsupportedMediaType().json(ErrorResponse { detail: msg.clone() })
            }
            AppError::NotFound => HttpResponse::NotFound().json(ErrorResponse {
                detail: "Not found.".to_string(),
            }),
            AppError::MethodNotAllowed { method, allow } => HttpResponse::MethodNotAllowed()
                .insert_header((header::ALLOW, *allow))
                .json(ErrorResponse { detail: format!("Method \"{}\" not allowed.", method) }),
            AppError::DatabaseError(err) => {
                log::error!("Database error: {:?}", err);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    detail: "A server error occurred.".to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::borrow::Cow;

    #[actix_web::test]
    async fn validation_error_renders_field_map() {
        let mut err = ValidationError::new("max_length");
        err.message = Some(Cow::from("Ensure this field has no more than 100 characters."));
        let response = AppError::field("name", err).error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["name"][0], "Ensure this field has no more than 100 characters.");
    }

    #[test]
    fn required_code_gets_default_message() {
        assert_eq!(message_for(&ValidationError::new("required")), "This field is required.");
    }

    #[actix_web::test]
    async fn database_error_hides_details() {
        let response = AppError::DatabaseError(sqlx::Error::PoolTimedOut).error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "A server error occurred.");
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let err = AppError::MethodNotAllowed {
            method: "DELETE".to_string(),
            allow: "GET, HEAD, POST",
        };
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET, HEAD, POST");
    }
}
