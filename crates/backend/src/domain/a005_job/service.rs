use super::repository;
use crate::domain::a001_customer;
use crate::shared::data::db::get_connection;
use crate::shared::error::ServiceError;
use chrono::{Datelike, Duration, Utc};
use contracts::domain::a005_job::aggregate::{job_number, Job, JobDto, JobStatus, JobType, RouteOp};

pub async fn create(dto: JobDto) -> anyhow::Result<i64> {
    let aggregate = Job::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    let id = repository::insert(get_connection(), &aggregate).await?;
    tracing::info!("Job {} created", aggregate.job_id);
    Ok(id)
}

pub async fn update(dto: JobDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or(ServiceError::NotFound)?;
    let mut aggregate = load(id).await?;

    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;

    repository::update(get_connection(), &aggregate).await
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Job>> {
    repository::get_by_id(id).await
}

/// All jobs with the customer name embedded
pub async fn list_all() -> anyhow::Result<Vec<Job>> {
    with_customers(repository::list_all().await?).await
}

pub async fn list_shop_floor() -> anyhow::Result<Vec<Job>> {
    with_customers(repository::list_shop_floor().await?).await
}

async fn with_customers(mut jobs: Vec<Job>) -> anyhow::Result<Vec<Job>> {
    let names = a001_customer::repository::name_map().await?;
    for job in &mut jobs {
        job.customers = names.get(&job.customer_id).cloned();
    }
    Ok(jobs)
}

async fn load(id: i64) -> anyhow::Result<Job> {
    Ok(repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?)
}

pub async fn start(id: i64) -> anyhow::Result<Job> {
    let mut job = load(id).await?;
    job.start().map_err(ServiceError::Conflict)?;
    repository::update(get_connection(), &job).await?;
    tracing::info!("Job {} started at {:?}", job.job_id, job.current_operation);
    Ok(job)
}

pub async fn pause(id: i64) -> anyhow::Result<Job> {
    let mut job = load(id).await?;
    job.pause().map_err(ServiceError::Conflict)?;
    repository::update(get_connection(), &job).await?;
    Ok(job)
}

pub async fn complete(id: i64, qty_completed: i32) -> anyhow::Result<Job> {
    if qty_completed < 0 {
        return Err(ServiceError::Validation("Completed quantity cannot be negative".into()).into());
    }
    let mut job = load(id).await?;
    job.record_completed(qty_completed)
        .map_err(ServiceError::Conflict)?;
    repository::update(get_connection(), &job).await?;
    tracing::info!(
        "Job {} reported {}/{} done",
        job.job_id,
        job.qty_completed,
        job.qty_ordered
    );
    Ok(job)
}

fn op(seq: i32, name: &str, machine_id: &str, operator_id: &str) -> RouteOp {
    RouteOp {
        op_seq: seq,
        op_name: name.into(),
        machine_id: machine_id.into(),
        operator_id: operator_id.into(),
    }
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let customers = a001_customer::repository::list_all().await?;
    let (Some(first), Some(second)) = (customers.first(), customers.get(1)) else {
        return Err(ServiceError::Validation("Seed customers first".into()).into());
    };

    let today = Utc::now().date_naive();
    let year = today.year();
    let data = vec![
        (
            JobDto {
                job_id: job_number(JobType::Cnc, year, 1),
                customer_id: Some(first.id),
                part_no: "P1001".into(),
                qty_ordered: 100,
                due_date: Some(today + Duration::days(14)),
                route: vec![op(10, "Turning", "2", "1"), op(20, "Milling", "1", "1")],
                total_cost: 4500.0,
                ..Default::default()
            },
            JobStatus::InProgress,
        ),
        (
            JobDto {
                job_id: job_number(JobType::Plating, year, 1),
                customer_id: Some(second.id),
                part_no: "P1002".into(),
                rev: "B".into(),
                qty_ordered: 250,
                due_date: Some(today + Duration::days(7)),
                job_type: JobType::Plating,
                route: vec![op(10, "Zinc Plating", "3", "2")],
                total_cost: 6800.0,
                ..Default::default()
            },
            JobStatus::Pending,
        ),
        (
            JobDto {
                job_id: job_number(JobType::Cnc, year, 2),
                customer_id: Some(second.id),
                part_no: "P1001".into(),
                qty_ordered: 150,
                due_date: Some(today + Duration::days(3)),
                route: vec![op(10, "Turning", "2", "1")],
                total_cost: 3200.0,
                ..Default::default()
            },
            JobStatus::Completed,
        ),
    ];

    for (dto, status) in data {
        let id = create(dto).await?;
        match status {
            JobStatus::InProgress => {
                start(id).await?;
                complete(id, 40).await?;
            }
            JobStatus::Completed => {
                start(id).await?;
                complete(id, 150).await?;
            }
            _ => {}
        }
    }

    Ok(())
}
