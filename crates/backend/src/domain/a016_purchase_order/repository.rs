use contracts::domain::a016_purchase_order::aggregate::PurchaseOrder;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub po_no: String,
    pub supplier_name: String,
    pub item_description: String,
    pub qty: f64,
    pub total_amount: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PurchaseOrder {
    fn from(m: Model) -> Self {
        PurchaseOrder {
            id: m.id,
            po_no: m.po_no,
            supplier_name: m.supplier_name,
            item_description: m.item_description,
            qty: m.qty,
            total_amount: m.total_amount,
            status: m.status,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<PurchaseOrder>> {
    let items = Entity::find()
        .order_by_asc(Column::PoNo)
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

pub async fn insert(row: &PurchaseOrder) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        po_no: Set(row.po_no.clone()),
        supplier_name: Set(row.supplier_name.clone()),
        item_description: Set(row.item_description.clone()),
        qty: Set(row.qty),
        total_amount: Set(row.total_amount),
        status: Set(row.status.clone()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
