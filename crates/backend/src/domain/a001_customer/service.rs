use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};

pub async fn create(dto: CustomerDto) -> anyhow::Result<i64> {
    let aggregate = Customer::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    repository::insert(&aggregate).await
}

pub async fn update(dto: CustomerDto) -> anyhow::Result<()> {
    let id = dto.id.ok_or(ServiceError::NotFound)?;
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;

    repository::update(&aggregate).await
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Customer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    repository::list_all().await
}

/// Demo customers; skipped when the table already has rows
pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let data = vec![
        CustomerDto {
            name: "ABC Corp".into(),
            gstin: "27AABCA1234F1Z5".into(),
            contact_person: "Ravi Kumar".into(),
            phone: "9876543210".into(),
            billing_address: "Plot 12, MIDC, Pune".into(),
            shipping_address: "Plot 12, MIDC, Pune".into(),
            credit_days: 30,
            ..Default::default()
        },
        CustomerDto {
            name: "XYZ Inc".into(),
            gstin: "29AAACX5678K1Z2".into(),
            contact_person: "Anita Rao".into(),
            phone: "9123456780".into(),
            billing_address: "Peenya Industrial Area, Bengaluru".into(),
            shipping_address: "Peenya Industrial Area, Bengaluru".into(),
            credit_days: 45,
            ..Default::default()
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
