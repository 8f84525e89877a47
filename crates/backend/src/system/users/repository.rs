use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Console operator account
pub type SysUser = Model;

pub async fn get_by_username(username: &str) -> Result<Option<SysUser>> {
    Entity::find()
        .filter(Column::Username.eq(username))
        .one(get_connection())
        .await
        .context("Failed to load user")
}

pub async fn count_users() -> Result<u64> {
    Ok(Entity::find().count(get_connection()).await?)
}

pub async fn create(username: &str, full_name: &str, role: &str, password_hash: &str) -> Result<i64> {
    let active = ActiveModel {
        id: NotSet,
        username: Set(username.to_string()),
        full_name: Set(full_name.to_string()),
        role: Set(role.to_string()),
        password_hash: Set(password_hash.to_string()),
        is_active: Set(true),
        created_at: Set(Some(Utc::now().to_rfc3339())),
    };
    let inserted = Entity::insert(active)
        .exec(get_connection())
        .await
        .context("Failed to insert user")?;
    Ok(inserted.last_insert_id)
}
