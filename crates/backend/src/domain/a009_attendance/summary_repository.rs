use contracts::domain::a009_attendance::summary::{AttendanceSummary, MonthRef, MonthTotals};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub employee_id: i64,
    pub month: i32,
    pub year: i32,
    pub total_working_days: i32,
    pub total_present_days: f64,
    pub total_absent_days: i32,
    pub total_leaves: i32,
    pub total_ot_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AttendanceSummary {
    fn from(m: Model) -> Self {
        AttendanceSummary {
            id: m.id,
            employee_id: m.employee_id,
            month: m.month as u32,
            year: m.year,
            total_working_days: m.total_working_days,
            total_present_days: m.total_present_days,
            total_absent_days: m.total_absent_days,
            total_leaves: m.total_leaves,
            total_ot_hours: m.total_ot_hours,
            employee: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_for_month(period: MonthRef) -> anyhow::Result<Vec<AttendanceSummary>> {
    let items = Entity::find()
        .filter(Column::Month.eq(period.month as i32))
        .filter(Column::Year.eq(period.year))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn delete_for_month<C: ConnectionTrait>(db: &C, period: MonthRef) -> anyhow::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::Month.eq(period.month as i32))
        .filter(Column::Year.eq(period.year))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    employee_id: i64,
    period: MonthRef,
    totals: &MonthTotals,
) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        employee_id: Set(employee_id),
        month: Set(period.month as i32),
        year: Set(period.year),
        total_working_days: Set(totals.total_working_days),
        total_present_days: Set(totals.total_present_days),
        total_absent_days: Set(totals.total_absent_days),
        total_leaves: Set(totals.total_leaves),
        total_ot_hours: Set(totals.total_ot_hours),
    };
    active.insert(db).await?;
    Ok(())
}
