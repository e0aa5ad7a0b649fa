use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::db::Store;
use crate::errors::AppError;
use crate::models::location::{
    LocationDraft, ADDRESS_MAX_LENGTH, COORDINATE_DECIMAL_PLACES, COORDINATE_MAX_DIGITS,
};
use crate::utils::payload::json_body;
use crate::utils::validation::{nullable, parse_decimal, parse_text, required, validate_payload};

/// Request body for `POST /api/locations/`. `id` and `created_at` are
/// read-only and dropped during deserialization.
#[derive(Deserialize, Validate)]
pub struct NewLocation {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(required, custom = "validate_coordinate")]
    latitude: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(required, custom = "validate_coordinate")]
    longitude: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(custom = "validate_address")]
    address: Option<Value>,
}

fn coordinate(value: &Value) -> Result<rust_decimal::Decimal, ValidationError> {
    parse_decimal(value, COORDINATE_MAX_DIGITS, COORDINATE_DECIMAL_PLACES)
}

fn address(value: &Value) -> Result<String, ValidationError> {
    parse_text(value, Some(ADDRESS_MAX_LENGTH), true)
}

fn validate_coordinate(value: &Value) -> Result<(), ValidationError> {
    coordinate(value).map(drop)
}

fn validate_address(value: &Value) -> Result<(), ValidationError> {
    address(value).map(drop)
}

impl NewLocation {
    fn into_draft(self) -> Result<LocationDraft, AppError> {
        validate_payload(&self)?;

        let address = match self.address.as_ref() {
            Some(value) => address(value).map_err(|err| AppError::field("address", err))?,
            None => String::new(),
        };

        Ok(LocationDraft {
            latitude: required("latitude", self.latitude.as_ref(), coordinate)?,
            longitude: required("longitude", self.longitude.as_ref(), coordinate)?,
            address,
        })
    }
}

pub async fn get_locations(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let locations = store.list_locations().await?;

    Ok(HttpResponse::Ok().json(locations))
}

pub async fn create_location(
    req: HttpRequest,
    store: web::Data<dyn Store>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let new_location: NewLocation = json_body(&req, &body)?;
    let draft = new_location.into_draft()?;
    let location = store.create_location(draft).await?;

    info!("Created location {}: {}", location.id, location);

    Ok(HttpResponse::Created().json(location))
}
