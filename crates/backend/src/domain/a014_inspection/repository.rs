use contracts::domain::a014_inspection::aggregate::Inspection;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inspections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub insp_id: String,
    pub job_id: String,
    pub insp_type: String,
    pub result: String,
    pub remarks: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Inspection {
    fn from(m: Model) -> Self {
        Inspection {
            id: m.id,
            insp_id: m.insp_id,
            job_id: m.job_id,
            insp_type: m.insp_type,
            result: m.result,
            remarks: m.remarks,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Inspection>> {
    let items = Entity::find()
        .order_by_asc(Column::InspId)
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

pub async fn insert(row: &Inspection) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        insp_id: Set(row.insp_id.clone()),
        job_id: Set(row.job_id.clone()),
        insp_type: Set(row.insp_type.clone()),
        result: Set(row.result.clone()),
        remarks: Set(row.remarks.clone()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
