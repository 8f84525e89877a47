use super::repository;
use contracts::domain::a012_inventory_item::aggregate::InventoryItem;

pub async fn list_all() -> anyhow::Result<Vec<InventoryItem>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let rows = vec![
        InventoryItem {
            item_id: "RM-EN8-40".into(),
            name: "EN8 Round Bar 40mm".into(),
            batch_no: "B-2025-101".into(),
            qty_on_hand: 350.0,
            location: "Rack A1".into(),
            reorder_point: 100.0,
            ..Default::default()
        },
        InventoryItem {
            item_id: "CH-ZN-01".into(),
            name: "Zinc Chloride".into(),
            batch_no: "B-2025-077".into(),
            qty_on_hand: 40.0,
            location: "Chemical Store".into(),
            reorder_point: 50.0,
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
