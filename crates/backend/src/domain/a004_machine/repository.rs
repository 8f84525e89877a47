use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::common::NameRef;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub machine_type: String,
    pub model: String,
    pub location: String,
    pub last_pm_date: Option<chrono::NaiveDate>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Machine {
    fn from(m: Model) -> Self {
        Machine {
            id: m.id,
            name: m.name,
            machine_type: m.machine_type,
            model: m.model,
            location: m.location,
            last_pm_date: m.last_pm_date,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Machine>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Machine>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn name_map() -> anyhow::Result<HashMap<i64, NameRef>> {
    let map = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| (m.id, NameRef::new(m.name)))
        .collect();
    Ok(map)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Machine) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(aggregate.name.clone()),
        machine_type: Set(aggregate.machine_type.clone()),
        model: Set(aggregate.model.clone()),
        location: Set(aggregate.location.clone()),
        last_pm_date: Set(aggregate.last_pm_date),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(aggregate: &Machine) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        name: Set(aggregate.name.clone()),
        machine_type: Set(aggregate.machine_type.clone()),
        model: Set(aggregate.model.clone()),
        location: Set(aggregate.location.clone()),
        last_pm_date: Set(aggregate.last_pm_date),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
