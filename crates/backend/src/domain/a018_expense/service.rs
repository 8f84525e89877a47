use super::repository;
use chrono::{Duration, Utc};
use contracts::domain::a018_expense::aggregate::Expense;

pub async fn list_all() -> anyhow::Result<Vec<Expense>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let rows = vec![
        Expense {
            expense_id: "EXP-001".into(),
            date: Some(today - Duration::days(5)),
            category: "Power".into(),
            amount: 38500.0,
            vendor: "MSEDCL".into(),
            description: "Monthly electricity bill".into(),
            ..Default::default()
        },
        Expense {
            expense_id: "EXP-002".into(),
            date: Some(today - Duration::days(3)),
            category: "Consumables".into(),
            amount: 4200.0,
            vendor: "Sharma Hardware".into(),
            description: "Coolant and cotton waste".into(),
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
