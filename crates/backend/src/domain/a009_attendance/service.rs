use super::{record_repository, summary_repository};
use super::record_repository::RecordValues;
use crate::domain::a002_employee;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use contracts::domain::a009_attendance::aggregate::{
    AttendanceRecord, AttendanceRecordDto, AttendanceStatus, BulkMarkRequest, BulkMarkResult,
};
use contracts::domain::a009_attendance::summary::{summarize_records, AttendanceSummary, MonthRef};
use sea_orm::TransactionTrait;
use std::collections::BTreeMap;

/// Marks for one day, ordered by employee name
pub async fn list_records(date: NaiveDate) -> anyhow::Result<Vec<AttendanceRecord>> {
    let refs = a002_employee::repository::ref_map().await?;
    let mut records = record_repository::list_by_date(date).await?;
    for record in &mut records {
        record.employee = refs.get(&record.employee_id).cloned();
    }
    records.sort_by(|a, b| a.employee_name().cmp(b.employee_name()));
    Ok(records)
}

/// Edits by id, otherwise upserts on (employee_id, date)
pub async fn save_record(dto: AttendanceRecordDto) -> anyhow::Result<()> {
    dto.validate().map_err(ServiceError::Validation)?;
    let (employee_id, date) = dto.key().map_err(ServiceError::Validation)?;
    let values = RecordValues {
        employee_id,
        date,
        status: dto.status,
        ot_hours: dto.ot_hours,
        notes: Some(dto.notes.as_str()),
    };

    match dto.id {
        Some(id) => {
            record_repository::get_by_id(id)
                .await?
                .ok_or(ServiceError::NotFound)?;
            record_repository::update(id, &values).await
        }
        None => record_repository::upsert(get_connection(), &values).await,
    }
}

pub async fn delete_record(id: i64) -> anyhow::Result<bool> {
    record_repository::delete(id).await
}

/// Marks every active employee for the date in one transaction
pub async fn bulk_mark(req: BulkMarkRequest) -> anyhow::Result<BulkMarkResult> {
    let employees = a002_employee::repository::list_active().await?;
    let txn = get_connection().begin().await?;
    for employee in &employees {
        record_repository::upsert(
            &txn,
            &RecordValues {
                employee_id: employee.id,
                date: req.date,
                status: req.status,
                ot_hours: 0.0,
                notes: None,
            },
        )
        .await?;
    }
    txn.commit().await?;

    tracing::info!(
        "Marked {} employees as {} for {}",
        employees.len(),
        req.status.as_str(),
        req.date
    );
    Ok(BulkMarkResult {
        marked: employees.len(),
    })
}

pub async fn list_summaries(period: MonthRef) -> anyhow::Result<Vec<AttendanceSummary>> {
    period.validate().map_err(ServiceError::Validation)?;
    let refs = a002_employee::repository::ref_map().await?;
    let mut summaries = summary_repository::list_for_month(period).await?;
    for summary in &mut summaries {
        summary.employee = refs.get(&summary.employee_id).cloned();
    }
    summaries.sort_by(|a, b| a.employee_name().cmp(b.employee_name()));
    Ok(summaries)
}

/// Rebuilds the month's summaries from the daily marks
pub async fn recalculate(period: MonthRef) -> anyhow::Result<Vec<AttendanceSummary>> {
    period.validate().map_err(ServiceError::Validation)?;
    let (from, to) = period
        .bounds()
        .ok_or_else(|| ServiceError::Validation(format!("Invalid month {:?}", period)))?;

    let txn = get_connection().begin().await?;
    let records = record_repository::list_between(&txn, from, to).await?;

    let mut by_employee: BTreeMap<i64, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        by_employee.entry(record.employee_id).or_default().push(record);
    }

    summary_repository::delete_for_month(&txn, period).await?;
    for (employee_id, records) in &by_employee {
        let totals = summarize_records(records);
        summary_repository::insert(&txn, *employee_id, period, &totals).await?;
    }
    txn.commit().await?;

    tracing::info!(
        "Recalculated {} attendance summaries for {:02}/{}",
        by_employee.len(),
        period.month,
        period.year
    );
    list_summaries(period).await
}

/// A fortnight of marks ending yesterday, then the current month's summary
pub async fn insert_test_data() -> anyhow::Result<()> {
    if record_repository::count().await? > 0 {
        return Ok(());
    }
    let employees = a002_employee::repository::list_active().await?;
    let today = Utc::now().date_naive();
    let db = get_connection();

    for offset in 1..=14 {
        let date = today - Duration::days(offset);
        for (index, employee) in employees.iter().enumerate() {
            let status = if date.weekday() == Weekday::Sun {
                AttendanceStatus::Sunday
            } else if (offset as usize + index) % 9 == 0 {
                AttendanceStatus::Absent
            } else if (offset as usize + index) % 11 == 0 {
                AttendanceStatus::HalfDay
            } else {
                AttendanceStatus::Present
            };
            let ot_hours = if status == AttendanceStatus::Present && offset % 3 == 0 {
                1.5
            } else {
                0.0
            };
            record_repository::upsert(
                db,
                &RecordValues {
                    employee_id: employee.id,
                    date,
                    status,
                    ot_hours,
                    notes: Some(""),
                },
            )
            .await?;
        }
    }

    recalculate(MonthRef {
        month: today.month(),
        year: today.year(),
    })
    .await?;
    Ok(())
}
