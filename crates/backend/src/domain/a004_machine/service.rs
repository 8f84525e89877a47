use super::repository;
use crate::shared::error::ServiceError;
use chrono::NaiveDate;
use contracts::domain::a004_machine::aggregate::{Machine, MachineDto};

pub async fn create(dto: MachineDto) -> anyhow::Result<i64> {
    let aggregate = Machine::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    repository::insert(&aggregate).await
}

pub async fn update(dto: MachineDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Machine>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Machine>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let data = [
        ("VMC-01", "VMC", "Haas VF-2", "Bay 1", (2025, 9, 1)),
        ("CNC-LATHE-01", "CNC Lathe", "Ace Jobber XL", "Bay 2", (2025, 8, 15)),
        ("PLATING-TANK-01", "Plating Tank", "Zinc Line 500L", "Plating Shop", (2025, 7, 20)),
    ];

    for (name, machine_type, model, location, (y, m, d)) in data {
        create(MachineDto {
            name: name.into(),
            machine_type: machine_type.into(),
            model: model.into(),
            location: location.into(),
            last_pm_date: NaiveDate::from_ymd_opt(y, m, d),
            ..Default::default()
        })
        .await?;
    }

    Ok(())
}
