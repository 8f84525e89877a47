use contracts::domain::a010_enquiry::aggregate::Enquiry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub enquiry_id: String,
    pub customer_id: i64,
    pub part_no: String,
    pub qty: i32,
    pub estimated_cost: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enquiry {
    fn from(m: Model) -> Self {
        Enquiry {
            id: m.id,
            enquiry_id: m.enquiry_id,
            customer_id: m.customer_id,
            part_no: m.part_no,
            qty: m.qty,
            estimated_cost: m.estimated_cost,
            status: m.status,
            customers: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Enquiry>> {
    let items = Entity::find()
        .order_by_asc(Column::EnquiryId)
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

pub async fn insert(row: &Enquiry) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        enquiry_id: Set(row.enquiry_id.clone()),
        customer_id: Set(row.customer_id),
        part_no: Set(row.part_no.clone()),
        qty: Set(row.qty),
        estimated_cost: Set(row.estimated_cost),
        status: Set(row.status.clone()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
