//! In-process `Store` used by the handler tests.

use super::Store;
use crate::models::department::{Department, DepartmentDraft};
use crate::models::location::{Location, LocationDraft};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    departments: RwLock<Vec<Department>>,
    locations: RwLock<Vec<Location>>,
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_departments(&self) -> Result<Vec<Department>, sqlx::Error> {
        Ok(self.departments.read().await.clone())
    }

    async fn create_department(&self, draft: DepartmentDraft) -> Result<Department, sqlx::Error> {
        let mut departments = self.departments.write().await;
        let department = Department {
            id: departments.len() as i64 + 1,
            name: draft.name,
            description: draft.description,
        };
        departments.push(department.clone());
        Ok(department)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, sqlx::Error> {
        let mut locations = self.locations.read().await.clone();
        locations.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(locations)
    }

    async fn create_location(&self, draft: LocationDraft) -> Result<Location, sqlx::Error> {
        let mut locations = self.locations.write().await;
        let location = Location {
            id: locations.len() as i64 + 1,
            latitude: draft.latitude,
            longitude: draft.longitude,
            address: draft.address,
            created_at: Utc::now(),
        };
        locations.push(location.clone());
        Ok(location)
    }
}
