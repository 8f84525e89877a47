use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a002_employee::aggregate::{default_employee_code, Employee, EmployeeDto};

pub async fn create(dto: EmployeeDto) -> anyhow::Result<i64> {
    let mut aggregate = Employee::new_for_insert(&dto);
    if aggregate.employee_code.is_empty() {
        let next = repository::count().await? as i64 + 1;
        aggregate.employee_code = default_employee_code(next);
    }
    aggregate.validate().map_err(ServiceError::Validation)?;
    repository::insert(&aggregate).await
}

pub async fn update(dto: EmployeeDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Employee>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Employee>> {
    repository::list_all().await
}

pub async fn list_active() -> anyhow::Result<Vec<Employee>> {
    repository::list_active().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let data = [
        ("John Doe", "CNC Operator", "Machining", "A", "Advanced"),
        ("Jane Smith", "Plating Operator", "Plating", "B", "Intermediate"),
        ("Peter Jones", "Quality Inspector", "Quality", "A", "Expert"),
    ];

    for (name, role, department, shift, skill) in data {
        create(EmployeeDto {
            name: name.into(),
            role: role.into(),
            department: department.into(),
            shift: shift.into(),
            skill_level: skill.into(),
            ..Default::default()
        })
        .await?;
    }

    Ok(())
}
