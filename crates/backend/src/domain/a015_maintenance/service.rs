use super::repository;
use crate::domain::a004_machine;
use chrono::{Duration, Utc};
use contracts::domain::a015_maintenance::aggregate::MaintenanceEntry;

pub async fn list_all() -> anyhow::Result<Vec<MaintenanceEntry>> {
    let names = a004_machine::repository::name_map().await?;
    let mut rows = repository::list_all().await?;
    for row in &mut rows {
        row.machines = names.get(&row.machine_id).cloned();
    }
    Ok(rows)
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let machines = a004_machine::repository::list_all().await?;
    let (Some(m0), Some(m1)) = (machines.first(), machines.get(1)) else {
        return Ok(());
    };
    let rows = vec![
        MaintenanceEntry {
            maintenance_id: "PM-001".into(),
            machine_id: m0.id,
            maintenance_type: "Preventive".into(),
            scheduled_date: Some(today - Duration::days(20)),
            completed_date: Some(today - Duration::days(20)),
            downtime_hours: 4.0,
            ..Default::default()
        },
        MaintenanceEntry {
            maintenance_id: "BD-001".into(),
            machine_id: m1.id,
            maintenance_type: "Breakdown".into(),
            scheduled_date: Some(today - Duration::days(2)),
            completed_date: None,
            downtime_hours: 6.5,
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
