use contracts::domain::a007_invoice::aggregate::{Invoice, PaymentStatus};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub invoice_no: String,
    pub job_id: String,
    pub customer_id: i64,
    pub invoice_date: chrono::NaiveDate,
    pub taxable_amount: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    pub payment_status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(m: Model) -> Self {
        Invoice {
            id: m.id,
            invoice_no: m.invoice_no,
            job_id: m.job_id,
            customer_id: m.customer_id,
            invoice_date: m.invoice_date,
            taxable_amount: m.taxable_amount,
            gst_amount: m.gst_amount,
            total_amount: m.total_amount,
            payment_status: PaymentStatus::from_str(&m.payment_status).unwrap_or_default(),
            created_at: m.created_at,
            customers: None,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Invoice>> {
    let items = Entity::find()
        .order_by_desc(Column::InvoiceDate)
        .order_by_desc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Invoice>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Invoice) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        invoice_no: Set(aggregate.invoice_no.clone()),
        job_id: Set(aggregate.job_id.clone()),
        customer_id: Set(aggregate.customer_id),
        invoice_date: Set(aggregate.invoice_date),
        taxable_amount: Set(aggregate.taxable_amount),
        gst_amount: Set(aggregate.gst_amount),
        total_amount: Set(aggregate.total_amount),
        payment_status: Set(aggregate.payment_status.as_str().to_string()),
        created_at: Set(aggregate.created_at),
    };
    let model = active.insert(conn()).await?;
    Ok(model.id)
}

pub async fn update(aggregate: &Invoice) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        invoice_no: sea_orm::ActiveValue::NotSet,
        job_id: Set(aggregate.job_id.clone()),
        customer_id: Set(aggregate.customer_id),
        invoice_date: Set(aggregate.invoice_date),
        taxable_amount: Set(aggregate.taxable_amount),
        gst_amount: Set(aggregate.gst_amount),
        total_amount: Set(aggregate.total_amount),
        payment_status: Set(aggregate.payment_status.as_str().to_string()),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
