use crate::shared::api_utils::{delete, get_json, post_empty, post_json, SavedId};
use contracts::domain::a005_job::aggregate::{CompleteJobRequest, Job, JobDto};

pub async fn fetch_all() -> Result<Vec<Job>, String> {
    get_json("/api/jobs").await
}

/// Pending and in-progress jobs, earliest due date first
pub async fn fetch_shop_floor() -> Result<Vec<Job>, String> {
    get_json("/api/jobs/shop-floor").await
}

pub async fn save(dto: &JobDto) -> Result<SavedId, String> {
    post_json("/api/jobs", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/jobs/{}", id)).await
}

pub async fn start(id: i64) -> Result<Job, String> {
    post_empty(&format!("/api/jobs/{}/start", id)).await
}

pub async fn pause(id: i64) -> Result<Job, String> {
    post_empty(&format!("/api/jobs/{}/pause", id)).await
}

pub async fn complete(id: i64, qty_completed: i32) -> Result<Job, String> {
    post_json(
        &format!("/api/jobs/{}/complete", id),
        &CompleteJobRequest { qty_completed },
    )
    .await
}
