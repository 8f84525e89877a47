use axum::http::StatusCode;

use crate::domain::*;

/// Seeds demo rows; masters first so later rows can reference them
pub async fn seed_all() -> anyhow::Result<()> {
    a001_customer::service::insert_test_data().await?;
    a002_employee::service::insert_test_data().await?;
    a003_part::service::insert_test_data().await?;
    a004_machine::service::insert_test_data().await?;
    a005_job::service::insert_test_data().await?;
    a006_challan::service::insert_test_data().await?;
    a007_invoice::service::insert_test_data().await?;
    a008_attendance_log::service::insert_test_data().await?;
    a009_attendance::service::insert_test_data().await?;
    a010_enquiry::service::insert_test_data().await?;
    a011_operation::service::insert_test_data().await?;
    a012_inventory_item::service::insert_test_data().await?;
    a013_tool::service::insert_test_data().await?;
    a014_inspection::service::insert_test_data().await?;
    a015_maintenance::service::insert_test_data().await?;
    a016_purchase_order::service::insert_test_data().await?;
    a017_dispatch::service::insert_test_data().await?;
    a018_expense::service::insert_test_data().await?;
    Ok(())
}

/// POST /api/testdata
pub async fn insert_test_data() -> Result<StatusCode, (StatusCode, String)> {
    match seed_all().await {
        Ok(()) => {
            tracing::info!("Demo data seeded");
            Ok(StatusCode::OK)
        }
        Err(e) => Err(crate::shared::error::error_response("seed demo data", &e)),
    }
}
