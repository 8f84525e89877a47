use crate::shared::api_utils::{delete, get_json, post_empty, post_json, SavedId};
use contracts::domain::a006_challan::aggregate::{Challan, ChallanDto};

pub async fn fetch_all() -> Result<Vec<Challan>, String> {
    get_json("/api/challans").await
}

/// Creating a challan also moves its job to pending-challan
pub async fn save(dto: &ChallanDto) -> Result<SavedId, String> {
    post_json("/api/challans", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/challans/{}", id)).await
}

/// Marks a sent challan received and completes its job
pub async fn receive(id: i64) -> Result<Challan, String> {
    post_empty(&format!("/api/challans/{}/receive", id)).await
}
