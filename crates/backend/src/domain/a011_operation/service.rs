use super::repository;
use contracts::domain::a011_operation::aggregate::Operation;

pub async fn list_all() -> anyhow::Result<Vec<Operation>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let rows = vec![
        Operation {
            part_no: "P1001".into(),
            op_seq: 10,
            op_name: "Turning".into(),
            machine_type: "CNC Lathe".into(),
            setup_time_min: 30.0,
            run_time_per_piece_min: 2.5,
            ..Default::default()
        },
        Operation {
            part_no: "P1001".into(),
            op_seq: 20,
            op_name: "Milling".into(),
            machine_type: "VMC".into(),
            setup_time_min: 45.0,
            run_time_per_piece_min: 4.0,
            ..Default::default()
        },
        Operation {
            part_no: "P1002".into(),
            op_seq: 10,
            op_name: "Zinc Plating".into(),
            machine_type: "Plating Tank".into(),
            setup_time_min: 20.0,
            run_time_per_piece_min: 0.5,
            ..Default::default()
        },
    ];

    for row in &rows {
        repository::insert(row).await?;
    }

    Ok(())
}
