use contracts::domain::a013_tool::aggregate::Tool;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tooling")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tool_id: String,
    pub name: String,
    pub last_purchase_cost: f64,
    pub useful_life_hours: f64,
    pub current_usage_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tool {
    fn from(m: Model) -> Self {
        Tool {
            id: m.id,
            tool_id: m.tool_id,
            name: m.name,
            last_purchase_cost: m.last_purchase_cost,
            useful_life_hours: m.useful_life_hours,
            current_usage_hours: m.current_usage_hours,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Tool>> {
    let items = Entity::find()
        .order_by_asc(Column::ToolId)
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

pub async fn insert(row: &Tool) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        tool_id: Set(row.tool_id.clone()),
        name: Set(row.name.clone()),
        last_purchase_cost: Set(row.last_purchase_cost),
        useful_life_hours: Set(row.useful_life_hours),
        current_usage_hours: Set(row.current_usage_hours),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
