use crate::shared::api_utils::{get_json, post_json, post_text};
use contracts::domain::a008_attendance_log::aggregate::{
    AttendanceCsvRow, AttendanceLog, CsvPreview, ImportResult,
};

pub async fn fetch_all() -> Result<Vec<AttendanceLog>, String> {
    get_json("/api/attendance").await
}

/// Server parses the CSV and returns only rows with an emp_id and a date
pub async fn preview(csv_text: String) -> Result<CsvPreview, String> {
    post_text("/api/attendance/preview", csv_text).await
}

pub async fn import(rows: &[AttendanceCsvRow]) -> Result<ImportResult, String> {
    post_json("/api/attendance", &rows).await
}
