use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a003_part::aggregate::{Part, PartDto};

pub async fn create(dto: PartDto) -> anyhow::Result<i64> {
    let aggregate = Part::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    repository::insert(&aggregate).await
}

pub async fn update(dto: PartDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Part>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Part>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let data = vec![
        PartDto {
            part_no: "P1001".into(),
            description: "Hydraulic valve body".into(),
            material: "EN8".into(),
            client_part_no: "ABC-HV-22".into(),
            ..Default::default()
        },
        PartDto {
            part_no: "P1002".into(),
            rev: "B".into(),
            description: "Mounting bracket".into(),
            material: "MS".into(),
            client_part_no: "XYZ-BR-07".into(),
            ..Default::default()
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
