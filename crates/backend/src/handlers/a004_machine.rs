use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_machine::aggregate::{Machine, MachineDto};
use serde_json::json;

use crate::domain::a004_machine;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/machines
pub async fn list_all() -> ApiResult<Vec<Machine>> {
    a004_machine::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list machines", &e))
}

/// GET /api/machines/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Machine> {
    match a004_machine::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Machine not found".to_string())),
        Err(e) => Err(error_response("get machine", &e)),
    }
}

/// POST /api/machines
pub async fn upsert(Json(dto): Json<MachineDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a004_machine::service::update(dto).await.map(|_| id),
        None => a004_machine::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save machine", &e))
}

/// DELETE /api/machines/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a004_machine::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Machine not found".to_string())),
        Err(e) => Err(error_response("delete machine", &e)),
    }
}
