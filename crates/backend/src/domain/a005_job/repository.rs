use contracts::domain::a005_job::aggregate::{Job, JobStatus, JobType, RouteOp};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub job_id: String,
    pub customer_id: i64,
    pub part_no: String,
    pub rev: String,
    pub qty_ordered: i32,
    pub qty_completed: i32,
    pub due_date: chrono::NaiveDate,
    /// JSON array of routing operations
    pub route: String,
    pub job_type: String,
    pub status: String,
    pub current_operation: Option<String>,
    pub total_cost: f64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Job {
    fn from(m: Model) -> Self {
        let route: Vec<RouteOp> = serde_json::from_str(&m.route).unwrap_or_else(|e| {
            tracing::warn!("Job {} has unreadable route: {}", m.job_id, e);
            Vec::new()
        });
        Job {
            id: m.id,
            job_id: m.job_id,
            customer_id: m.customer_id,
            part_no: m.part_no,
            rev: m.rev,
            qty_ordered: m.qty_ordered,
            qty_completed: m.qty_completed,
            due_date: m.due_date,
            route,
            job_type: JobType::from_str(&m.job_type).unwrap_or_default(),
            status: JobStatus::from_str(&m.status).unwrap_or_default(),
            current_operation: m.current_operation,
            total_cost: m.total_cost,
            created_at: m.created_at,
            customers: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn route_json(route: &[RouteOp]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(route)?)
}

/// Newest first
pub async fn list_all() -> anyhow::Result<Vec<Job>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Pending and running jobs, earliest due date first
pub async fn list_shop_floor() -> anyhow::Result<Vec<Job>> {
    let items = Entity::find()
        .filter(Column::Status.is_in([
            JobStatus::Pending.as_str(),
            JobStatus::InProgress.as_str(),
        ]))
        .order_by_asc(Column::DueDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Job>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_job_id<C: ConnectionTrait>(db: &C, job_id: &str) -> anyhow::Result<Option<Job>> {
    let result = Entity::find()
        .filter(Column::JobId.eq(job_id))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &Job) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        job_id: Set(aggregate.job_id.clone()),
        customer_id: Set(aggregate.customer_id),
        part_no: Set(aggregate.part_no.clone()),
        rev: Set(aggregate.rev.clone()),
        qty_ordered: Set(aggregate.qty_ordered),
        qty_completed: Set(aggregate.qty_completed),
        due_date: Set(aggregate.due_date),
        route: Set(route_json(&aggregate.route)?),
        job_type: Set(aggregate.job_type.as_str().to_string()),
        status: Set(aggregate.status.as_str().to_string()),
        current_operation: Set(aggregate.current_operation.clone()),
        total_cost: Set(aggregate.total_cost),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(db).await?;
    Ok(model.id)
}

/// Full row write; `job_id` stays as issued
pub async fn update<C: ConnectionTrait>(db: &C, aggregate: &Job) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        job_id: sea_orm::ActiveValue::NotSet,
        customer_id: Set(aggregate.customer_id),
        part_no: Set(aggregate.part_no.clone()),
        rev: Set(aggregate.rev.clone()),
        qty_ordered: Set(aggregate.qty_ordered),
        qty_completed: Set(aggregate.qty_completed),
        due_date: Set(aggregate.due_date),
        route: Set(route_json(&aggregate.route)?),
        job_type: Set(aggregate.job_type.as_str().to_string()),
        status: Set(aggregate.status.as_str().to_string()),
        current_operation: Set(aggregate.current_operation.clone()),
        total_cost: Set(aggregate.total_cost),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
