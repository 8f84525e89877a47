use contracts::domain::a015_maintenance::aggregate::MaintenanceEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub maintenance_id: String,
    pub machine_id: i64,
    #[sea_orm(column_name = "type")]
    pub maintenance_type: String,
    pub scheduled_date: Option<chrono::NaiveDate>,
    pub completed_date: Option<chrono::NaiveDate>,
    pub downtime_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MaintenanceEntry {
    fn from(m: Model) -> Self {
        MaintenanceEntry {
            id: m.id,
            maintenance_id: m.maintenance_id,
            machine_id: m.machine_id,
            maintenance_type: m.maintenance_type,
            scheduled_date: m.scheduled_date,
            completed_date: m.completed_date,
            downtime_hours: m.downtime_hours,
            machines: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<MaintenanceEntry>> {
    let items = Entity::find()
        .order_by_asc(Column::MaintenanceId)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(row: &MaintenanceEntry) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        maintenance_id: Set(row.maintenance_id.clone()),
        machine_id: Set(row.machine_id),
        maintenance_type: Set(row.maintenance_type.clone()),
        scheduled_date: Set(row.scheduled_date),
        completed_date: Set(row.completed_date),
        downtime_hours: Set(row.downtime_hours),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
