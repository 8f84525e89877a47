use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use contracts::domain::a009_attendance::aggregate::{
    AttendanceRecord, AttendanceRecordDto, BulkMarkRequest, BulkMarkResult,
};
use contracts::domain::a009_attendance::summary::{AttendanceSummary, MonthRef};
use serde::Deserialize;

use crate::domain::a009_attendance;
use crate::shared::error::{error_response, ApiResult, ServiceError};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

/// GET /api/attendance-records?date=YYYY-MM-DD (defaults to today)
pub async fn list_records(Query(q): Query<DateQuery>) -> ApiResult<Vec<AttendanceRecord>> {
    let date = q.date.unwrap_or_else(|| Utc::now().date_naive());
    a009_attendance::service::list_records(date)
        .await
        .map(Json)
        .map_err(|e| error_response("list attendance records", &e))
}

/// POST /api/attendance-records
pub async fn save_record(Json(dto): Json<AttendanceRecordDto>) -> Result<StatusCode, (StatusCode, String)> {
    a009_attendance::service::save_record(dto)
        .await
        .map(|_| StatusCode::OK)
        .map_err(|e| error_response("save attendance record", &e))
}

/// POST /api/attendance-records/bulk
pub async fn bulk_mark(Json(req): Json<BulkMarkRequest>) -> ApiResult<BulkMarkResult> {
    a009_attendance::service::bulk_mark(req)
        .await
        .map(Json)
        .map_err(|e| error_response("bulk mark attendance", &e))
}

/// DELETE /api/attendance-records/:id
pub async fn delete_record(Path(id): Path<i64>) -> Result<StatusCode, (StatusCode, String)> {
    match a009_attendance::service::delete_record(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((StatusCode::NOT_FOUND, "Record not found".to_string())),
        Err(e) => Err(error_response("delete attendance record", &e)),
    }
}

fn checked(period: MonthRef) -> Result<MonthRef, (StatusCode, String)> {
    period.validate().map_err(|msg| {
        let e = anyhow::Error::new(ServiceError::Validation(msg));
        error_response("attendance period", &e)
    })?;
    Ok(period)
}

/// GET /api/attendance-summary?month=&year=
pub async fn list_summaries(Query(period): Query<MonthRef>) -> ApiResult<Vec<AttendanceSummary>> {
    a009_attendance::service::list_summaries(checked(period)?)
        .await
        .map(Json)
        .map_err(|e| error_response("list attendance summary", &e))
}

/// POST /api/attendance-summary/recalculate
pub async fn recalculate(Json(period): Json<MonthRef>) -> ApiResult<Vec<AttendanceSummary>> {
    a009_attendance::service::recalculate(checked(period)?)
        .await
        .map(Json)
        .map_err(|e| error_response("recalculate attendance summary", &e))
}
