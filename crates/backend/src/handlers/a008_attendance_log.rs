use axum::Json;
use contracts::domain::a008_attendance_log::aggregate::{
    AttendanceCsvRow, AttendanceLog, CsvPreview, ImportResult,
};

use crate::domain::a008_attendance_log;
use crate::shared::error::{error_response, ApiResult, ServiceError};

/// GET /api/attendance
pub async fn list_all() -> ApiResult<Vec<AttendanceLog>> {
    a008_attendance_log::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list attendance", &e))
}

/// POST /api/attendance/preview, body is the raw CSV text
pub async fn preview(body: String) -> ApiResult<CsvPreview> {
    a008_attendance_log::service::preview(&body)
        .map(Json)
        .map_err(|e| {
            let e = anyhow::Error::new(ServiceError::Validation(format!("Invalid CSV: {}", e)));
            error_response("preview attendance csv", &e)
        })
}

/// POST /api/attendance
pub async fn import(Json(rows): Json<Vec<AttendanceCsvRow>>) -> ApiResult<ImportResult> {
    a008_attendance_log::service::import(rows)
        .await
        .map(Json)
        .map_err(|e| error_response("import attendance", &e))
}
