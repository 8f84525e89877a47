use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a005_job::aggregate::{Job, JobDto, CompleteJobRequest};
use serde_json::json;

use crate::domain::a005_job;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/jobs
pub async fn list_all() -> ApiResult<Vec<Job>> {
    a005_job::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list jobs", &e))
}

/// GET /api/jobs/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Job> {
    match a005_job::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Job not found".to_string())),
        Err(e) => Err(error_response("get job", &e)),
    }
}

/// POST /api/jobs
pub async fn upsert(Json(dto): Json<JobDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a005_job::service::update(dto).await.map(|_| id),
        None => a005_job::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save job", &e))
}

/// DELETE /api/jobs/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a005_job::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Job not found".to_string())),
        Err(e) => Err(error_response("delete job", &e)),
    }
}

/// GET /api/jobs/shop-floor
pub async fn shop_floor() -> ApiResult<Vec<Job>> {
    a005_job::service::list_shop_floor()
        .await
        .map(Json)
        .map_err(|e| error_response("list shop floor", &e))
}

/// POST /api/jobs/:id/start
pub async fn start(Path(id): Path<i64>) -> ApiResult<Job> {
    a005_job::service::start(id)
        .await
        .map(Json)
        .map_err(|e| error_response("start job", &e))
}

/// POST /api/jobs/:id/pause
pub async fn pause(Path(id): Path<i64>) -> ApiResult<Job> {
    a005_job::service::pause(id)
        .await
        .map(Json)
        .map_err(|e| error_response("pause job", &e))
}

/// POST /api/jobs/:id/complete
pub async fn complete(
    Path(id): Path<i64>,
    Json(req): Json<CompleteJobRequest>,
) -> ApiResult<Job> {
    a005_job::service::complete(id, req.qty_completed)
        .await
        .map(Json)
        .map_err(|e| error_response("complete job", &e))
}
