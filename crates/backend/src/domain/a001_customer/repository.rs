use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::NameRef;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub gstin: String,
    pub contact_person: String,
    pub phone: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub credit_days: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
            gstin: m.gstin,
            contact_person: m.contact_person,
            phone: m.phone,
            billing_address: m.billing_address,
            shipping_address: m.shipping_address,
            credit_days: m.credit_days,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// `id -> {name}` lookup used to embed customers into other lists
pub async fn name_map() -> anyhow::Result<HashMap<i64, NameRef>> {
    let map = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(|m| (m.id, NameRef::new(m.name)))
        .collect();
    Ok(map)
}

pub async fn insert(aggregate: &Customer) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(aggregate.name.clone()),
        gstin: Set(aggregate.gstin.clone()),
        contact_person: Set(aggregate.contact_person.clone()),
        phone: Set(aggregate.phone.clone()),
        billing_address: Set(aggregate.billing_address.clone()),
        shipping_address: Set(aggregate.shipping_address.clone()),
        credit_days: Set(aggregate.credit_days),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(aggregate: &Customer) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        name: Set(aggregate.name.clone()),
        gstin: Set(aggregate.gstin.clone()),
        contact_person: Set(aggregate.contact_person.clone()),
        phone: Set(aggregate.phone.clone()),
        billing_address: Set(aggregate.billing_address.clone()),
        shipping_address: Set(aggregate.shipping_address.clone()),
        credit_days: Set(aggregate.credit_days),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
