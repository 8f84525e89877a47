use super::repository;
use crate::domain::a001_customer;
use contracts::domain::a010_enquiry::aggregate::Enquiry;

pub async fn list_all() -> anyhow::Result<Vec<Enquiry>> {
    let names = a001_customer::repository::name_map().await?;
    let mut rows = repository::list_all().await?;
    for row in &mut rows {
        row.customers = names.get(&row.customer_id).cloned();
    }
    Ok(rows)
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let customers = a001_customer::repository::list_all().await?;
    let (Some(c0), Some(c1)) = (customers.first(), customers.get(1)) else {
        return Ok(());
    };
    let rows = vec![
        Enquiry {
            enquiry_id: "ENQ-001".into(),
            customer_id: c0.id,
            part_no: "P1001".into(),
            qty: 500,
            estimated_cost: 22500.0,
            status: "quoted".into(),
            ..Default::default()
        },
        Enquiry {
            enquiry_id: "ENQ-002".into(),
            customer_id: c1.id,
            part_no: "P1002".into(),
            qty: 1200,
            estimated_cost: 54000.0,
            status: "open".into(),
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
