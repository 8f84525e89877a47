use super::repository;
use chrono::{Datelike, Duration, Utc};
use contracts::domain::a017_dispatch::aggregate::Dispatch;

pub async fn list_all() -> anyhow::Result<Vec<Dispatch>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let year = today.year();
    let rows = vec![
        Dispatch {
            dispatch_id: "DSP-001".into(),
            job_id: format!("CNC-{}-002", year),
            lr_no: "LR-78231".into(),
            eway_bill_no: "EWB-331200458812".into(),
            dispatch_date: Some(today - Duration::days(1)),
            transporter_name: "VRL Logistics".into(),
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
