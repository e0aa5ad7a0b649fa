use serde::Serialize;

pub const NAME_MAX_LENGTH: usize = 100;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// A validated department that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
}
