use contracts::domain::a012_inventory_item::aggregate::InventoryItem;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_id: String,
    pub name: String,
    pub batch_no: String,
    pub qty_on_hand: f64,
    pub location: String,
    pub reorder_point: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InventoryItem {
    fn from(m: Model) -> Self {
        InventoryItem {
            id: m.id,
            item_id: m.item_id,
            name: m.name,
            batch_no: m.batch_no,
            qty_on_hand: m.qty_on_hand,
            location: m.location,
            reorder_point: m.reorder_point,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    let items = Entity::find()
        .order_by_asc(Column::ItemId)
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

pub async fn insert(row: &InventoryItem) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        item_id: Set(row.item_id.clone()),
        name: Set(row.name.clone()),
        batch_no: Set(row.batch_no.clone()),
        qty_on_hand: Set(row.qty_on_hand),
        location: Set(row.location.clone()),
        reorder_point: Set(row.reorder_point),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
