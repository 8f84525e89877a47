use super::{csv_import, repository};
use crate::domain::a002_employee;
use crate::shared::data::db::get_connection;
use chrono::{Duration, Utc};
use contracts::domain::a008_attendance_log::aggregate::{
    sort_by_date_desc, AttendanceCsvRow, AttendanceLog, CsvPreview, ImportResult, NewAttendanceLog,
};

/// Punch log, newest first, with employee names embedded
pub async fn list_all() -> anyhow::Result<Vec<AttendanceLog>> {
    let names = a002_employee::repository::name_map().await?;
    let mut rows = repository::list_all().await?;
    for row in &mut rows {
        row.employees = names.get(&row.emp_id).cloned();
    }
    sort_by_date_desc(&mut rows);
    Ok(rows)
}

pub fn preview(csv_text: &str) -> anyhow::Result<CsvPreview> {
    Ok(CsvPreview::new(csv_import::parse_attendance_csv(csv_text)?))
}

/// Inserts previewed rows; rows whose fields do not convert are skipped
pub async fn import(rows: Vec<AttendanceCsvRow>) -> anyhow::Result<ImportResult> {
    let mut entries = Vec::with_capacity(rows.len());
    let mut skipped = 0;
    for row in rows.iter().filter(|r| r.is_complete()) {
        match row.to_new_entry() {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Skipping attendance row: {}", e);
                skipped += 1;
            }
        }
    }
    skipped += rows.iter().filter(|r| !r.is_complete()).count();

    let inserted = repository::insert_many(get_connection(), &entries).await?;
    tracing::info!("Attendance import: {} inserted, {} skipped", inserted, skipped);
    Ok(ImportResult { inserted, skipped })
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let employees = a002_employee::repository::list_all().await?;
    let date = Utc::now().date_naive() - Duration::days(1);
    let punches = [("08:00", "17:00", 8.0), ("08:05", "17:02", 7.95), ("07:55", "17:10", 8.25)];

    let entries: Vec<NewAttendanceLog> = employees
        .iter()
        .zip(punches)
        .map(|(e, (in_time, out_time, hours))| NewAttendanceLog {
            emp_id: e.id,
            date,
            in_time: in_time.into(),
            out_time: out_time.into(),
            worked_hours: hours,
        })
        .collect();
    repository::insert_many(get_connection(), &entries).await?;
    Ok(())
}
