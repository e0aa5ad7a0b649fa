use super::Store;
use crate::models::department::{Department, DepartmentDraft};
use crate::models::location::{Location, LocationDraft};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

const SELECT_DEPARTMENTS: &str = "SELECT id, name, description FROM departments ORDER BY id";
const INSERT_DEPARTMENT: &str =
    "INSERT INTO departments (name, description) VALUES ($1, $2) RETURNING id, name, description";
const SELECT_LOCATIONS: &str = "SELECT id, latitude, longitude, address, created_at \
     FROM locations ORDER BY created_at DESC, id DESC";
const INSERT_LOCATION: &str = "INSERT INTO locations (latitude, longitude, address, created_at) \
     VALUES ($1, $2, $3, $4) RETURNING id, latitude, longitude, address, created_at";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>(SELECT_DEPARTMENTS)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_department(&self, draft: DepartmentDraft) -> Result<Department, sqlx::Error> {
        sqlx::query_as::<_, Department>(INSERT_DEPARTMENT)
            .bind(&draft.name)
            .bind(&draft.description)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, sqlx::Error> {
        sqlx::query_as::<_, Location>(SELECT_LOCATIONS)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_location(&self, draft: LocationDraft) -> Result<Location, sqlx::Error> {
        let now = Utc::now();

        sqlx::query_as::<_, Location>(INSERT_LOCATION)
            .bind(draft.latitude)
            .bind(draft.longitude)
            .bind(&draft.address)
            .bind(now)
            .fetch_one(&self.pool)
            .await
    }
}
