use actix_web::{HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Decodes a JSON request body. An empty body is read as `{}` so that the
/// field validators report what is missing.
pub fn json_body<T: DeserializeOwned>(req: &HttpRequest, body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_slice(b"{}")
            .map_err(|err| AppError::BadRequest(format!("JSON parse error - {}", err)));
    }

    let is_json = match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype().as_str() == "json"
                || mime.suffix().map(|suffix| suffix.as_str()) == Some("json")
        }
        _ => false,
    };
    if !is_json {
        let content_type = req.content_type();
        return Err(AppError::UnsupportedMediaType(format!(
            "Unsupported media type \"{}\" in request.",
            content_type
        )));
    }

    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("JSON parse error - {}", err)))
}
