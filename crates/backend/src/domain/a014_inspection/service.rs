use super::repository;
use chrono::{Datelike, Utc};
use contracts::domain::a014_inspection::aggregate::Inspection;

pub async fn list_all() -> anyhow::Result<Vec<Inspection>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let year = today.year();
    let rows = vec![
        Inspection {
            insp_id: "QI-001".into(),
            job_id: format!("CNC-{}-001", year),
            insp_type: "First Article".into(),
            result: "pass".into(),
            remarks: "All dimensions within tolerance".into(),
            ..Default::default()
        },
        Inspection {
            insp_id: "QI-002".into(),
            job_id: format!("PLT-{}-001", year),
            insp_type: "Coating Thickness".into(),
            result: "pass".into(),
            remarks: "12 microns average".into(),
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
