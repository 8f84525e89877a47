use crate::shared::api_utils::{delete, get_json, post_json, post_no_content};
use chrono::NaiveDate;
use contracts::domain::a009_attendance::aggregate::{
    AttendanceRecord, AttendanceRecordDto, BulkMarkRequest, BulkMarkResult,
};
use contracts::domain::a009_attendance::summary::{AttendanceSummary, MonthRef};
use serde::Serialize;

#[derive(Serialize)]
struct DateQuery {
    date: NaiveDate,
}

fn query<Q: Serialize>(path: &str, q: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(q).map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("{}?{}", path, qs))
}

pub async fn fetch_records(date: NaiveDate) -> Result<Vec<AttendanceRecord>, String> {
    get_json(&query("/api/attendance-records", &DateQuery { date })?).await
}

/// Upserts on (employee_id, date)
pub async fn save(dto: &AttendanceRecordDto) -> Result<(), String> {
    post_no_content("/api/attendance-records", dto).await
}

pub async fn bulk_mark(request: &BulkMarkRequest) -> Result<BulkMarkResult, String> {
    post_json("/api/attendance-records/bulk", request).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/attendance-records/{}", id)).await
}

pub async fn fetch_summaries(period: MonthRef) -> Result<Vec<AttendanceSummary>, String> {
    get_json(&query("/api/attendance-summary", &period)?).await
}

/// Rebuilds the month from the daily records and returns the new rows
pub async fn recalculate(period: MonthRef) -> Result<Vec<AttendanceSummary>, String> {
    post_json("/api/attendance-summary/recalculate", &period).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_strings_match_the_handlers() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
        assert_eq!(
            query("/api/attendance-records", &DateQuery { date }).unwrap(),
            "/api/attendance-records?date=2025-10-26"
        );
        assert_eq!(
            query("/api/attendance-summary", &MonthRef { month: 10, year: 2025 }).unwrap(),
            "/api/attendance-summary?month=10&year=2025"
        );
    }
}
