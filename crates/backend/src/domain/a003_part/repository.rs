use contracts::domain::a003_part::aggregate::Part;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub part_no: String,
    pub rev: String,
    pub description: String,
    pub material: String,
    pub client_part_no: String,
    pub drawing_url: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Part {
    fn from(m: Model) -> Self {
        Part {
            id: m.id,
            part_no: m.part_no,
            rev: m.rev,
            description: m.description,
            material: m.material,
            client_part_no: m.client_part_no,
            drawing_url: m.drawing_url,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Part>> {
    let items = Entity::find()
        .order_by_asc(Column::PartNo)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Part>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Part) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        part_no: Set(aggregate.part_no.clone()),
        rev: Set(aggregate.rev.clone()),
        description: Set(aggregate.description.clone()),
        material: Set(aggregate.material.clone()),
        client_part_no: Set(aggregate.client_part_no.clone()),
        drawing_url: Set(aggregate.drawing_url.clone()),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

/// `part_no` is never rewritten
pub async fn update(aggregate: &Part) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        part_no: sea_orm::ActiveValue::NotSet,
        rev: Set(aggregate.rev.clone()),
        description: Set(aggregate.description.clone()),
        material: Set(aggregate.material.clone()),
        client_part_no: Set(aggregate.client_part_no.clone()),
        drawing_url: Set(aggregate.drawing_url.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
