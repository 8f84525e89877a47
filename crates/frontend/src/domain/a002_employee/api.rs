use crate::shared::api_utils::{delete, get_json, post_json, SavedId};
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto};

/// Newest first
pub async fn fetch_all() -> Result<Vec<Employee>, String> {
    get_json("/api/employees").await
}

pub async fn save(dto: &EmployeeDto) -> Result<SavedId, String> {
    post_json("/api/employees", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/employees/{}", id)).await
}
