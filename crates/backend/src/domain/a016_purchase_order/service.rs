use super::repository;
use chrono::{Datelike, Utc};
use contracts::domain::a016_purchase_order::aggregate::PurchaseOrder;

pub async fn list_all() -> anyhow::Result<Vec<PurchaseOrder>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let year = today.year();
    let rows = vec![
        PurchaseOrder {
            po_no: format!("PO-{}-001", year),
            supplier_name: "Steel Traders".into(),
            item_description: "EN8 Round Bar 40mm".into(),
            qty: 500.0,
            total_amount: 42500.0,
            status: "open".into(),
            ..Default::default()
        },
        PurchaseOrder {
            po_no: format!("PO-{}-002", year),
            supplier_name: "ChemSupply Co".into(),
            item_description: "Zinc Chloride".into(),
            qty: 100.0,
            total_amount: 18000.0,
            status: "received".into(),
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
