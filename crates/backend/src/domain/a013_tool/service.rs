use super::repository;
use contracts::domain::a013_tool::aggregate::Tool;

pub async fn list_all() -> anyhow::Result<Vec<Tool>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let rows = vec![
        Tool {
            tool_id: "T-INS-01".into(),
            name: "CNMG Insert".into(),
            last_purchase_cost: 450.0,
            useful_life_hours: 40.0,
            current_usage_hours: 12.5,
            ..Default::default()
        },
        Tool {
            tool_id: "T-EM-10".into(),
            name: "10mm End Mill".into(),
            last_purchase_cost: 1800.0,
            useful_life_hours: 120.0,
            current_usage_hours: 96.0,
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
