use contracts::domain::a018_expense::aggregate::Expense;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub expense_id: String,
    pub date: Option<chrono::NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub vendor: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Expense {
    fn from(m: Model) -> Self {
        Expense {
            id: m.id,
            expense_id: m.expense_id,
            date: m.date,
            category: m.category,
            amount: m.amount,
            vendor: m.vendor,
            description: m.description,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Expense>> {
    let items = Entity::find()
        .order_by_asc(Column::ExpenseId)
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

pub async fn insert(row: &Expense) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        expense_id: Set(row.expense_id.clone()),
        date: Set(row.date),
        category: Set(row.category.clone()),
        amount: Set(row.amount),
        vendor: Set(row.vendor.clone()),
        description: Set(row.description.clone()),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}
