use contracts::domain::a017_dispatch::aggregate::Dispatch;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispatch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub dispatch_id: String,
    pub job_id: String,
    pub lr_no: String,
    pub eway_bill_no: String,
    pub dispatch_date: Option<chrono::NaiveDate>,
    pub transporter_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Dispatch {
    fn from(m: Model) -> Self {
        Dispatch {
            id: m.id,
            dispatch_id: m.dispatch_id,
            job_id: m.job_id,
            lr_no: m.lr_no,
            eway_bill_no: m.eway_bill_no,
            dispatch_date: m.dispatch_date,
            transporter_name: m.transporter_name,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Dispatch>> {
    let items = Entity::find()
        .order_by_asc(Column::DispatchId)
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

pub async fn insert(row: &Dispatch) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        dispatch_id: Set(row.dispatch_id.clone()),
        job_id: Set(row.job_id.clone()),
        lr_no: Set(row.lr_no.clone()),
        eway_bill_no: Set(row.eway_bill_no.clone()),
        dispatch_date: Set(row.dispatch_date),
        transporter_name: Set(row.transporter_name.clone()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
