use contracts::domain::a011_operation::aggregate::Operation;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub part_no: String,
    pub op_seq: i32,
    pub op_name: String,
    pub machine_type: String,
    pub setup_time_min: f64,
    pub run_time_per_piece_min: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Operation {
    fn from(m: Model) -> Self {
        Operation {
            id: m.id,
            part_no: m.part_no,
            op_seq: m.op_seq,
            op_name: m.op_name,
            machine_type: m.machine_type,
            setup_time_min: m.setup_time_min,
            run_time_per_piece_min: m.run_time_per_piece_min,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Operation>> {
    let items = Entity::find()
        .order_by_asc(Column::PartNo)
        .order_by_asc(Column::OpSeq)
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

pub async fn insert(row: &Operation) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        part_no: Set(row.part_no.clone()),
        op_seq: Set(row.op_seq),
        op_name: Set(row.op_name.clone()),
        machine_type: Set(row.machine_type.clone()),
        setup_time_min: Set(row.setup_time_min),
        run_time_per_piece_min: Set(row.run_time_per_piece_min),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
