use crate::shared::api_utils::{delete, get_json, post_json, SavedId};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};

pub async fn fetch_all() -> Result<Vec<Customer>, String> {
    get_json("/api/customers").await
}

pub async fn save(dto: &CustomerDto) -> Result<SavedId, String> {
    post_json("/api/customers", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/customers/{}", id)).await
}
