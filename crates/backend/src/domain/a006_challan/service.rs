use super::repository;
use crate::domain::{a001_customer, a005_job};
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::domain::a005_job::aggregate::JobStatus;
use contracts::domain::a006_challan::aggregate::{
    challan_number, parse_params, Challan, ChallanDto, ChallanStatus, ProcessType,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Issues a challan and moves its job to `pending-challan` in one transaction.
/// A missing customer is taken from the job.
pub async fn create(dto: ChallanDto) -> anyhow::Result<i64> {
    create_with(get_connection(), dto).await
}

async fn create_with(db: &DatabaseConnection, mut dto: ChallanDto) -> anyhow::Result<i64> {
    let txn = db.begin().await?;

    let mut job = a005_job::repository::get_by_job_id(&txn, dto.job_id.trim())
        .await?
        .ok_or_else(|| ServiceError::Validation(format!("Job '{}' does not exist", dto.job_id)))?;
    if dto.customer_id.is_none() {
        dto.customer_id = Some(job.customer_id);
    }

    let aggregate = Challan::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;

    let id = repository::insert(&txn, &aggregate).await?;
    job.mark_pending_challan();
    a005_job::repository::update(&txn, &job).await?;
    txn.commit().await?;

    tracing::info!("Challan {} sent for job {}", aggregate.challan_no, job.job_id);
    Ok(id)
}

pub async fn update(dto: ChallanDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or(ServiceError::NotFound)?;
    let db = get_connection();
    let mut aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;

    repository::update(db, &aggregate).await
}

/// Marks goods as returned and completes the linked job in one transaction
pub async fn receive(id: i64) -> anyhow::Result<Challan> {
    receive_with(get_connection(), id, Utc::now().date_naive()).await
}

async fn receive_with(db: &DatabaseConnection, id: i64, today: NaiveDate) -> anyhow::Result<Challan> {
    let txn = db.begin().await?;
    let mut challan = repository::get_by_id(&txn, id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    challan.receive(today).map_err(ServiceError::Conflict)?;
    repository::update(&txn, &challan).await?;
    match a005_job::repository::get_by_job_id(&txn, &challan.job_id).await? {
        Some(mut job) => {
            job.mark_completed();
            a005_job::repository::update(&txn, &job).await?;
        }
        None => tracing::warn!("Challan {} refers to unknown job {}", challan.challan_no, challan.job_id),
    }
    txn.commit().await?;

    tracing::info!("Challan {} received", challan.challan_no);
    Ok(challan)
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Challan>> {
    repository::get_by_id(get_connection(), id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Challan>> {
    with_customers(repository::list_all().await?).await
}

/// Challans still at the plater
pub async fn list_pending() -> anyhow::Result<Vec<Challan>> {
    with_customers(repository::list_by_status(ChallanStatus::Sent).await?).await
}

async fn with_customers(mut challans: Vec<Challan>) -> anyhow::Result<Vec<Challan>> {
    let names = a001_customer::repository::name_map().await?;
    for challan in &mut challans {
        challan.customers = names.get(&challan.customer_id).cloned();
    }
    Ok(challans)
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let jobs = a005_job::repository::list_all().await?;
    let Some(job) = jobs.iter().find(|j| j.status == JobStatus::Pending) else {
        return Ok(());
    };
    let today = Utc::now().date_naive();
    create(ChallanDto {
        challan_no: challan_number(today.year(), 1),
        job_id: job.job_id.clone(),
        qty_sent: job.qty_ordered,
        process_type: ProcessType::ZincPlating,
        params_json: parse_params("temp=65C\ncurrent=2.5A"),
        date_sent: Some(today),
        expected_return_date: Some(today + Duration::days(5)),
        ..Default::default()
    })
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_scratch_database;
    use axum::http::StatusCode;
    use contracts::domain::a005_job::aggregate::{Job, JobDto, JobType};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    async fn seed_job(db: &DatabaseConnection) -> Job {
        let dto = JobDto {
            job_id: "PLT-2025-007".into(),
            customer_id: Some(3),
            part_no: "P1002".into(),
            qty_ordered: 250,
            due_date: Some(day(30)),
            job_type: JobType::Plating,
            ..Default::default()
        };
        let mut job = Job::new_for_insert(&dto).unwrap();
        job.id = a005_job::repository::insert(db, &job).await.unwrap();
        job
    }

    fn challan_for(job: &Job) -> ChallanDto {
        ChallanDto {
            challan_no: challan_number(2025, 7),
            job_id: job.job_id.clone(),
            qty_sent: job.qty_ordered,
            date_sent: Some(day(20)),
            expected_return_date: Some(day(25)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn challan_round_trip_drives_the_job() {
        let db = open_scratch_database("challan-round-trip").await.unwrap();
        let job = seed_job(&db).await;

        let id = create_with(&db, challan_for(&job)).await.unwrap();
        let issued = repository::get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(issued.status, ChallanStatus::Sent);
        assert_eq!(issued.customer_id, 3);
        let at_plater = a005_job::repository::get_by_job_id(&db, &job.job_id).await.unwrap().unwrap();
        assert_eq!(at_plater.status, JobStatus::PendingChallan);

        let received = receive_with(&db, id, day(23)).await.unwrap();
        assert_eq!(received.status, ChallanStatus::Received);
        assert_eq!(received.date_received, Some(day(23)));
        let stored = repository::get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(stored.status, ChallanStatus::Received);
        assert_eq!(stored.date_received, Some(day(23)));
        let finished = a005_job::repository::get_by_job_id(&db, &job.job_id).await.unwrap().unwrap();
        assert_eq!(finished.status, JobStatus::Completed);
        assert!(finished.current_operation.is_none());

        let again = receive_with(&db, id, day(24)).await.unwrap_err();
        let status = again.downcast_ref::<ServiceError>().map(ServiceError::status_code);
        assert_eq!(status, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn challan_for_unknown_job_writes_nothing() {
        let db = open_scratch_database("challan-unknown-job").await.unwrap();
        let job = seed_job(&db).await;
        let mut dto = challan_for(&job);
        dto.job_id = "CNC-2025-999".into();

        let err = create_with(&db, dto).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<ServiceError>(), Some(ServiceError::Validation(_))));
        assert!(repository::get_by_id(&db, 1).await.unwrap().is_none());
        let untouched = a005_job::repository::get_by_job_id(&db, &job.job_id).await.unwrap().unwrap();
        assert_eq!(untouched.status, JobStatus::Pending);
    }
}
