use super::repository;
use crate::domain::a001_customer;
use crate::shared::error::ServiceError;
use chrono::{Datelike, Duration, Utc};
use contracts::domain::a007_invoice::aggregate::{invoice_number, Invoice, InvoiceDto};

/// GST and total are recomputed here whatever the client sent
pub async fn create(dto: InvoiceDto) -> anyhow::Result<i64> {
    let aggregate = Invoice::new_for_insert(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;
    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Invoice {} raised for {:.2}",
        aggregate.invoice_no,
        aggregate.total_amount
    );
    Ok(id)
}

pub async fn update(dto: InvoiceDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or(ServiceError::NotFound)?;
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto).map_err(ServiceError::Validation)?;
    aggregate.validate().map_err(ServiceError::Validation)?;

    repository::update(&aggregate).await
}

pub async fn mark_paid(id: i64) -> anyhow::Result<Invoice> {
    let mut invoice = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    invoice.mark_paid().map_err(ServiceError::Conflict)?;
    repository::update(&invoice).await?;
    Ok(invoice)
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Invoice>> {
    let Some(mut invoice) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    invoice.customers = a001_customer::repository::get_by_id(invoice.customer_id)
        .await?
        .map(|c| contracts::domain::common::NameRef::new(c.name));
    Ok(Some(invoice))
}

pub async fn list_all() -> anyhow::Result<Vec<Invoice>> {
    let names = a001_customer::repository::name_map().await?;
    let mut invoices = repository::list_all().await?;
    for invoice in &mut invoices {
        invoice.customers = names.get(&invoice.customer_id).cloned();
    }
    Ok(invoices)
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let customers = a001_customer::repository::list_all().await?;
    let today = Utc::now().date_naive();
    let year = today.year();
    let data = [
        (1, "CNC", 0, 5000.0, false),
        (2, "PLT", 1, 7500.0, true),
        (3, "CNC", 1, 12000.0, true),
    ];

    for (seq, prefix, customer_index, taxable, paid) in data {
        let Some(customer) = customers.get(customer_index) else {
            continue;
        };
        let id = create(InvoiceDto {
            invoice_no: invoice_number(year, seq),
            job_id: format!("{}-{}-{:03}", prefix, year, 1),
            customer_id: Some(customer.id),
            invoice_date: Some(today - Duration::days(30 * (seq as i64 - 1))),
            taxable_amount: taxable,
            ..Default::default()
        })
        .await?;
        if paid {
            mark_paid(id).await?;
        }
    }

    Ok(())
}
