use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_part::aggregate::{Part, PartDto};
use serde_json::json;

use crate::domain::a003_part;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/parts
pub async fn list_all() -> ApiResult<Vec<Part>> {
    a003_part::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list parts", &e))
}

/// GET /api/parts/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Part> {
    match a003_part::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Part not found".to_string())),
        Err(e) => Err(error_response("get part", &e)),
    }
}

/// POST /api/parts
pub async fn upsert(Json(dto): Json<PartDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a003_part::service::update(dto).await.map(|_| id),
        None => a003_part::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save part", &e))
}

/// DELETE /api/parts/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a003_part::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Part not found".to_string())),
        Err(e) => Err(error_response("delete part", &e)),
    }
}
