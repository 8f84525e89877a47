use contracts::domain::a009_attendance::aggregate::{AttendanceRecord, AttendanceStatus};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_id: i64,
    pub date: chrono::NaiveDate,
    pub status: String,
    pub ot_hours: f64,
    pub notes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AttendanceRecord {
    fn from(m: Model) -> Self {
        AttendanceRecord {
            id: m.id,
            employee_id: m.employee_id,
            date: m.date,
            status: AttendanceStatus::from_str(&m.status).unwrap_or_default(),
            ot_hours: m.ot_hours,
            notes: m.notes,
            employee: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Values for one (employee, date) mark
pub struct RecordValues<'a> {
    pub employee_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub ot_hours: f64,
    /// `None` keeps the stored notes on overwrite
    pub notes: Option<&'a str>,
}

pub async fn list_by_date(date: chrono::NaiveDate) -> anyhow::Result<Vec<AttendanceRecord>> {
    let items = Entity::find()
        .filter(Column::Date.eq(date))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Records with `from <= date < to`
pub async fn list_between<C: ConnectionTrait>(
    db: &C,
    from: chrono::NaiveDate,
    to: chrono::NaiveDate,
) -> anyhow::Result<Vec<AttendanceRecord>> {
    let items = Entity::find()
        .filter(Column::Date.gte(from))
        .filter(Column::Date.lt(to))
        .order_by_asc(Column::EmployeeId)
        .order_by_asc(Column::Date)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<AttendanceRecord>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Insert or overwrite the mark for (employee_id, date)
pub async fn upsert<C: ConnectionTrait>(db: &C, values: &RecordValues<'_>) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        employee_id: Set(values.employee_id),
        date: Set(values.date),
        status: Set(values.status.as_str().to_string()),
        ot_hours: Set(values.ot_hours),
        notes: Set(values.notes.unwrap_or_default().to_string()),
    };
    let mut overwrite = vec![Column::Status, Column::OtHours];
    if values.notes.is_some() {
        overwrite.push(Column::Notes);
    }
    Entity::insert(active)
        .on_conflict(
            OnConflict::columns([Column::EmployeeId, Column::Date])
                .update_columns(overwrite)
                .to_owned(),
        )
        .exec(db)
        .await?;
    Ok(())
}

pub async fn update(id: i64, values: &RecordValues<'_>) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        employee_id: Set(values.employee_id),
        date: Set(values.date),
        status: Set(values.status.as_str().to_string()),
        ot_hours: Set(values.ot_hours),
        notes: Set(values.notes.unwrap_or_default().to_string()),
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
