use contracts::domain::a006_challan::aggregate::{Challan, ChallanStatus, ProcessParams, ProcessType};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "challans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub challan_no: String,
    pub job_id: String,
    pub customer_id: i64,
    pub qty_sent: i32,
    pub process_type: String,
    pub thickness: String,
    /// JSON object of plating parameters
    pub params_json: String,
    pub date_sent: chrono::NaiveDate,
    pub expected_return_date: Option<chrono::NaiveDate>,
    pub date_received: Option<chrono::NaiveDate>,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Challan {
    fn from(m: Model) -> Self {
        let params_json: ProcessParams = serde_json::from_str(&m.params_json).unwrap_or_default();
        Challan {
            id: m.id,
            challan_no: m.challan_no,
            job_id: m.job_id,
            customer_id: m.customer_id,
            qty_sent: m.qty_sent,
            process_type: ProcessType::from_display_name(&m.process_type).unwrap_or_default(),
            thickness: m.thickness,
            params_json,
            date_sent: m.date_sent,
            expected_return_date: m.expected_return_date,
            date_received: m.date_received,
            status: ChallanStatus::from_str(&m.status).unwrap_or_default(),
            created_at: m.created_at,
            customers: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn active_model(aggregate: &Challan) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        challan_no: Set(aggregate.challan_no.clone()),
        job_id: Set(aggregate.job_id.clone()),
        customer_id: Set(aggregate.customer_id),
        qty_sent: Set(aggregate.qty_sent),
        process_type: Set(aggregate.process_type.display_name().to_string()),
        thickness: Set(aggregate.thickness.clone()),
        params_json: Set(serde_json::to_string(&aggregate.params_json)?),
        date_sent: Set(aggregate.date_sent),
        expected_return_date: Set(aggregate.expected_return_date),
        date_received: Set(aggregate.date_received),
        status: Set(aggregate.status.as_str().to_string()),
        created_at: Set(aggregate.created_at),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Challan>> {
    let items = Entity::find()
        .order_by_desc(Column::DateSent)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_status(status: ChallanStatus) -> anyhow::Result<Vec<Challan>> {
    let items = Entity::find()
        .filter(Column::Status.eq(status.as_str()))
        .order_by_asc(Column::ExpectedReturnDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> anyhow::Result<Option<Challan>> {
    let result = Entity::find_by_id(id).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &Challan) -> anyhow::Result<i64> {
    let model = active_model(aggregate)?.insert(db).await?;
    Ok(model.id)
}

/// `challan_no` and `job_id` stay as issued
pub async fn update<C: ConnectionTrait>(db: &C, aggregate: &Challan) -> anyhow::Result<()> {
    let mut active = active_model(aggregate)?;
    active.id = Set(aggregate.id);
    active.challan_no = sea_orm::ActiveValue::NotSet;
    active.job_id = sea_orm::ActiveValue::NotSet;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(db).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
