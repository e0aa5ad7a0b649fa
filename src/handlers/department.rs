use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::db::Store;
use crate::errors::AppError;
use crate::models::department::{DepartmentDraft, NAME_MAX_LENGTH};
use crate::utils::payload::json_body;
use crate::utils::validation::{nullable, parse_text, required, validate_payload};

/// Request body for `POST /api/departments/`. Any `id` sent by the client is
/// ignored.
#[derive(Deserialize, Validate)]
pub struct NewDepartment {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(required, custom = "validate_name")]
    name: Option<Value>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(required, custom = "validate_description")]
    description: Option<Value>,
}

fn validate_name(value: &Value) -> Result<(), ValidationError> {
    parse_text(value, Some(NAME_MAX_LENGTH), false).map(drop)
}

fn validate_description(value: &Value) -> Result<(), ValidationError> {
    parse_text(value, None, false).map(drop)
}

impl NewDepartment {
    fn into_draft(self) -> Result<DepartmentDraft, AppError> {
        validate_payload(&self)?;

        let name = required("name", self.name.as_ref(), |v| {
            parse_text(v, Some(NAME_MAX_LENGTH), false)
        })?;
        let description = required("description", self.description.as_ref(), |v| {
            parse_text(v, None, false)
        })?;

        Ok(DepartmentDraft { name, description })
    }
}

pub async fn get_departments(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    let departments = store.list_departments().await?;

    Ok(HttpResponse::Ok().json(departments))
}

pub async fn create_department(
    req: HttpRequest,
    store: web::Data<dyn Store>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let new_department: NewDepartment = json_body(&req, &body)?;
    let draft = new_department.into_draft()?;
    let department = store.create_department(draft).await?;

    info!("Created department {} ({})", department.id, department.name);

    Ok(HttpResponse::Created().json(department))
}
