use crate::config::Config;
use crate::models::department::{Department, DepartmentDraft};
use crate::models::location::{Location, LocationDraft};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[cfg(test)]
pub mod memory;
pub mod postgres;

/// Persistence for the two resources. Handlers only see this trait, shared
/// through `web::Data<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    /// All departments in insertion (`id`) order.
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error>;

    async fn create_department(&self, draft: DepartmentDraft) -> Result<Department, sqlx::Error>;

    /// All locations, newest first.
    async fn list_locations(&self) -> Result<Vec<Location>, sqlx::Error>;

    /// Stores a location stamped with the current server time.
    async fn create_location(&self, draft: LocationDraft) -> Result<Location, sqlx::Error>;
}

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
