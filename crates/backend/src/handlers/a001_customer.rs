use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use serde_json::json;

use crate::domain::a001_customer;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/customers
pub async fn list_all() -> ApiResult<Vec<Customer>> {
    a001_customer::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list customers", &e))
}

/// GET /api/customers/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Customer> {
    match a001_customer::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Customer not found".to_string())),
        Err(e) => Err(error_response("get customer", &e)),
    }
}

/// POST /api/customers
pub async fn upsert(Json(dto): Json<CustomerDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a001_customer::service::update(dto).await.map(|_| id),
        None => a001_customer::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save customer", &e))
}

/// DELETE /api/customers/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a001_customer::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Customer not found".to_string())),
        Err(e) => Err(error_response("delete customer", &e)),
    }
}
