use contracts::domain::a002_employee::aggregate::{Employee, STATUS_ACTIVE};
use contracts::domain::common::{EmployeeRef, NameRef};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_code: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub shift: String,
    pub skill_level: String,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(m: Model) -> Self {
        Employee {
            id: m.id,
            employee_code: m.employee_code,
            name: m.name,
            role: m.role,
            department: m.department,
            phone: m.phone,
            shift: m.shift,
            skill_level: m.skill_level,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest hires first
pub async fn list_all() -> anyhow::Result<Vec<Employee>> {
    let items = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_active() -> anyhow::Result<Vec<Employee>> {
    let items = Entity::find()
        .filter(Column::Status.eq(STATUS_ACTIVE))
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Employee>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn ref_map() -> anyhow::Result<HashMap<i64, EmployeeRef>> {
    let map = list_all()
        .await?
        .into_iter()
        .map(|e| (e.id, e.to_ref()))
        .collect();
    Ok(map)
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

pub async fn insert(aggregate: &Employee) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        employee_code: Set(aggregate.employee_code.clone()),
        name: Set(aggregate.name.clone()),
        role: Set(aggregate.role.clone()),
        department: Set(aggregate.department.clone()),
        phone: Set(aggregate.phone.clone()),
        shift: Set(aggregate.shift.clone()),
        skill_level: Set(aggregate.skill_level.clone()),
        status: Set(aggregate.status.clone()),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(aggregate: &Employee) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        employee_code: Set(aggregate.employee_code.clone()),
        name: Set(aggregate.name.clone()),
        role: Set(aggregate.role.clone()),
        department: Set(aggregate.department.clone()),
        phone: Set(aggregate.phone.clone()),
        shift: Set(aggregate.shift.clone()),
        skill_level: Set(aggregate.skill_level.clone()),
        status: Set(aggregate.status.clone()),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
