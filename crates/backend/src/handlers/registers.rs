//! Read-only registers, filled by seed data or external writers

use axum::Json;

use crate::domain;
use crate::shared::error::{error_response, ApiResult};

/// GET /api/enquiries
pub async fn enquiries() -> ApiResult<Vec<contracts::domain::a010_enquiry::aggregate::Enquiry>> {
    domain::a010_enquiry::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list enquiries", &e))
}

/// GET /api/operations
pub async fn operations() -> ApiResult<Vec<contracts::domain::a011_operation::aggregate::Operation>> {
    domain::a011_operation::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list operations", &e))
}

/// GET /api/inventory
pub async fn inventory() -> ApiResult<Vec<contracts::domain::a012_inventory_item::aggregate::InventoryItem>> {
    domain::a012_inventory_item::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list inventory", &e))
}

/// GET /api/tooling
pub async fn tooling() -> ApiResult<Vec<contracts::domain::a013_tool::aggregate::Tool>> {
    domain::a013_tool::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list tooling", &e))
}

/// GET /api/inspections
pub async fn inspections() -> ApiResult<Vec<contracts::domain::a014_inspection::aggregate::Inspection>> {
    domain::a014_inspection::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list inspections", &e))
}

/// GET /api/maintenance
pub async fn maintenance() -> ApiResult<Vec<contracts::domain::a015_maintenance::aggregate::MaintenanceEntry>> {
    domain::a015_maintenance::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list maintenance", &e))
}

/// GET /api/purchase-orders
pub async fn purchase_orders() -> ApiResult<Vec<contracts::domain::a016_purchase_order::aggregate::PurchaseOrder>> {
    domain::a016_purchase_order::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list purchase-orders", &e))
}

/// GET /api/dispatch
pub async fn dispatch() -> ApiResult<Vec<contracts::domain::a017_dispatch::aggregate::Dispatch>> {
    domain::a017_dispatch::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list dispatch", &e))
}

/// GET /api/expenses
pub async fn expenses() -> ApiResult<Vec<contracts::domain::a018_expense::aggregate::Expense>> {
    domain::a018_expense::service::list_all()
        .await
        .map(Json)
        .map_err(|e| error_response("list expenses", &e))
}
