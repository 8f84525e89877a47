use crate::shared::api_utils::{delete, get_json, post_json, SavedId};
use contracts::domain::a004_machine::aggregate::{Machine, MachineDto};

pub async fn fetch_all() -> Result<Vec<Machine>, String> {
    get_json("/api/machines").await
}

pub async fn save(dto: &MachineDto) -> Result<SavedId, String> {
    post_json("/api/machines", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/machines/{}", id)).await
}
