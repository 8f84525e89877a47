use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a007_invoice::aggregate::{Invoice, InvoiceDto};
use serde_json::json;

use crate::domain::a007_invoice;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/invoices
pub async fn list_all() -> ApiResult<Vec<Invoice>> {
    a007_invoice::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list invoices", &e))
}

/// GET /api/invoices/:id
pub async fn get_by_id(Path(id): Path<i64>) -> ApiResult<Invoice> {
    match a007_invoice::service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "Invoice not found".to_string())),
        Err(e) => Err(error_response("get invoice", &e)),
    }
}

/// POST /api/invoices
pub async fn upsert(Json(dto): Json<InvoiceDto>) -> ApiResult<serde_json::Value> {
    let result = match dto.id {
        Some(id) => a007_invoice::service::update(dto).await.map(|_| id),
        None => a007_invoice::service::create(dto).await,
    };

    result
        .map(|id| Json(json!({"id": id})))
        .map_err(|e| error_response("save invoice", &e))
}

/// DELETE /api/invoices/:id
pub async fn delete(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a007_invoice::service::delete(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Invoice not found".to_string())),
        Err(e) => Err(error_response("delete invoice", &e)),
    }
}

/// POST /api/invoices/:id/mark-paid
pub async fn mark_paid(Path(id): Path<i64>) -> ApiResult<Invoice> {
    a007_invoice::service::mark_paid(id)
        .await
        .map(Json)
        .map_err(|e| error_response("mark invoice paid", &e))
}
