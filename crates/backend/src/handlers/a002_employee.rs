use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto};
use serde_json::json;

use crate::domain::a002_employee;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/employees
pub async fn list_all() -> ApiResult<Vec<Employee>> {
    a002_employee::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list employees", &e))
}

/// GET /api/employees/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Employee> {
    match a002_employee::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Employee not found".to_string())),
        Err(e) => Err(error_response("get employee", &e)),
    }
}

/// POST /api/employees
pub async fn upsert(Json(dto): Json<EmployeeDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a002_employee::service::update(dto).await.map(|_| id),
        None => a002_employee::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save employee", &e))
}

/// DELETE /api/employees/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a002_employee::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Employee not found".to_string())),
        Err(e) => Err(error_response("delete employee", &e)),
    }
}
