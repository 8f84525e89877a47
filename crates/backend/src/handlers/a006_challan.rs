use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a006_challan::aggregate::{Challan, ChallanDto};
use serde_json::json;

use crate::domain::a006_challan;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/challans
pub async fn list_all() -> ApiResult<Vec<Challan>> {
    a006_challan::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list challans", &e))
}

/// GET /api/challans/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Challan> {
    match a006_challan::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Challan not found".to_string())),
        Err(e) => Err(error_response("get challan", &e)),
    }
}

/// POST /api/challans
pub async fn upsert(Json(dto): Json<ChallanDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a006_challan::service::update(dto).await.map(|_| id),
        None => a006_challan::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save challan", &e))
}

/// DELETE /api/challans/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a006_challan::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Challan not found".to_string())),
        Err(e) => Err(error_response("delete challan", &e)),
    }
}

/// POST /api/challans/:id/receive
pub async fn receive(Path(id): Path<i64>) -> ApiResult<Challan> {
    a006_challan::service::receive(id)
        .await
        .map(Json)
        .map_err(|e| error_response("receive challan", &e))
}
