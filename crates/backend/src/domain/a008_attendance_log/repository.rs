use contracts::domain::a008_attendance_log::aggregate::{AttendanceLog, NewAttendanceLog};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub emp_id: i64,
    pub date: chrono::NaiveDate,
    pub in_time: String,
    pub out_time: String,
    pub worked_hours: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AttendanceLog {
    fn from(m: Model) -> Self {
        AttendanceLog {
            id: m.id,
            emp_id: m.emp_id,
            date: m.date,
            in_time: m.in_time,
            out_time: m.out_time,
            worked_hours: m.worked_hours,
            employees: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<AttendanceLog>> {
    let items = Entity::find()
        .order_by_desc(Column::Date)
        .order_by_asc(Column::EmpId)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Rows per INSERT statement; five bound values each keeps a chunk well under
/// sqlite's variable limit
const INSERT_CHUNK: usize = 1000;

/// Inserts all rows in one transaction, a statement per chunk
pub async fn insert_many(db: &DatabaseConnection, entries: &[NewAttendanceLog]) -> anyhow::Result<usize> {
    if entries.is_empty() {
        return Ok(0);
    }
    let txn = db.begin().await?;
    for chunk in entries.chunks(INSERT_CHUNK) {
        let models = chunk.iter().map(|e| ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            emp_id: Set(e.emp_id),
            date: Set(e.date),
            in_time: Set(e.in_time.clone()),
            out_time: Set(e.out_time.clone()),
            worked_hours: Set(e.worked_hours),
        });
        Entity::insert_many(models).exec(&txn).await?;
    }
    txn.commit().await?;
    Ok(entries.len())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::open_scratch_database;
    use chrono::{Duration, NaiveDate};

    fn punches(count: usize) -> Vec<NewAttendanceLog> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..count)
            .map(|i| NewAttendanceLog {
                emp_id: (i % 250) as i64 + 1,
                date: start + Duration::days((i / 250) as i64),
                in_time: "08:00".into(),
                out_time: "17:00".into(),
                worked_hours: 8.0,
            })
            .collect()
    }

    #[tokio::test]
    async fn large_upload_spans_several_statements() {
        let db = open_scratch_database("attendance-bulk").await.unwrap();
        let entries = punches(INSERT_CHUNK * 7 + 13);

        let inserted = insert_many(&db, &entries).await.unwrap();
        assert_eq!(inserted, entries.len());
        assert_eq!(Entity::find().count(&db).await.unwrap(), entries.len() as u64);
    }

    #[tokio::test]
    async fn empty_upload_is_a_no_op() {
        let db = open_scratch_database("attendance-empty").await.unwrap();
        assert_eq!(insert_many(&db, &[]).await.unwrap(), 0);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 0);
    }
}
