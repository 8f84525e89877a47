use crate::shared::api_utils::{delete, get_json, post_json, SavedId};
use contracts::domain::a003_part::aggregate::{Part, PartDto};

pub async fn fetch_all() -> Result<Vec<Part>, String> {
    get_json("/api/parts").await
}

pub async fn save(dto: &PartDto) -> Result<SavedId, String> {
    post_json("/api/parts", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/parts/{}", id)).await
}
