use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .merge(protected_routes())
}

/// Routes that need a bearer token
fn protected_routes() -> Router {
    Router::new()
        .route("/api/system/auth/me", get(system::handlers::auth::me))
        // ========================================
        // MASTERS
        // ========================================
        .route(
            "/api/customers",
            get(handlers::a001_customer::list_all).post(handlers::a001_customer::upsert),
        )
        .route(
            "/api/customers/:id",
            get(handlers::a001_customer::get_by_id).delete(handlers::a001_customer::delete),
        )
        .route(
            "/api/employees",
            get(handlers::a002_employee::list_all).post(handlers::a002_employee::upsert),
        )
        .route(
            "/api/employees/:id",
            get(handlers::a002_employee::get_by_id).delete(handlers::a002_employee::delete),
        )
        .route(
            "/api/parts",
            get(handlers::a003_part::list_all).post(handlers::a003_part::upsert),
        )
        .route(
            "/api/parts/:id",
            get(handlers::a003_part::get_by_id).delete(handlers::a003_part::delete),
        )
        .route(
            "/api/machines",
            get(handlers::a004_machine::list_all).post(handlers::a004_machine::upsert),
        )
        .route(
            "/api/machines/:id",
            get(handlers::a004_machine::get_by_id).delete(handlers::a004_machine::delete),
        )
        // ========================================
        // PRODUCTION
        // ========================================
        .route(
            "/api/jobs",
            get(handlers::a005_job::list_all).post(handlers::a005_job::upsert),
        )
        .route("/api/jobs/shop-floor", get(handlers::a005_job::shop_floor))
        .route(
            "/api/jobs/:id",
            get(handlers::a005_job::get_by_id).delete(handlers::a005_job::delete),
        )
        .route("/api/jobs/:id/start", post(handlers::a005_job::start))
        .route("/api/jobs/:id/pause", post(handlers::a005_job::pause))
        .route("/api/jobs/:id/complete", post(handlers::a005_job::complete))
        .route(
            "/api/challans",
            get(handlers::a006_challan::list_all).post(handlers::a006_challan::upsert),
        )
        .route(
            "/api/challans/:id",
            get(handlers::a006_challan::get_by_id).delete(handlers::a006_challan::delete),
        )
        .route(
            "/api/challans/:id/receive",
            post(handlers::a006_challan::receive),
        )
        // ========================================
        // BILLING
        // ========================================
        .route(
            "/api/invoices",
            get(handlers::a007_invoice::list_all).post(handlers::a007_invoice::upsert),
        )
        .route(
            "/api/invoices/:id",
            get(handlers::a007_invoice::get_by_id).delete(handlers::a007_invoice::delete),
        )
        .route(
            "/api/invoices/:id/mark-paid",
            post(handlers::a007_invoice::mark_paid),
        )
        // ========================================
        // ATTENDANCE
        // ========================================
        .route(
            "/api/attendance",
            get(handlers::a008_attendance_log::list_all).post(handlers::a008_attendance_log::import),
        )
        .route(
            "/api/attendance/preview",
            post(handlers::a008_attendance_log::preview),
        )
        .route(
            "/api/attendance-records",
            get(handlers::a009_attendance::list_records).post(handlers::a009_attendance::save_record),
        )
        .route(
            "/api/attendance-records/bulk",
            post(handlers::a009_attendance::bulk_mark),
        )
        .route(
            "/api/attendance-records/:id",
            axum::routing::delete(handlers::a009_attendance::delete_record),
        )
        .route(
            "/api/attendance-summary",
            get(handlers::a009_attendance::list_summaries),
        )
        .route(
            "/api/attendance-summary/recalculate",
            post(handlers::a009_attendance::recalculate),
        )
        // ========================================
        // REGISTERS (read-only)
        // ========================================
        .route("/api/enquiries", get(handlers::registers::enquiries))
        .route("/api/operations", get(handlers::registers::operations))
        .route("/api/inventory", get(handlers::registers::inventory))
        .route("/api/tooling", get(handlers::registers::tooling))
        .route("/api/inspections", get(handlers::registers::inspections))
        .route("/api/maintenance", get(handlers::registers::maintenance))
        .route("/api/purchase-orders", get(handlers::registers::purchase_orders))
        .route("/api/dispatch", get(handlers::registers::dispatch))
        .route("/api/expenses", get(handlers::registers::expenses))
        // ========================================
        // REPORTS & DASHBOARD
        // ========================================
        .route("/api/dashboard", get(handlers::reports::dashboard))
        .route(
            "/api/reports/monthly-turnover",
            get(handlers::reports::monthly_turnover),
        )
        .route("/api/reports/jobs", get(handlers::reports::jobs))
        .route(
            "/api/reports/pending-challans",
            get(handlers::reports::pending_challans),
        )
        .route("/api/testdata", post(handlers::testdata::insert_test_data))
        .layer(middleware::from_fn(system::auth::middleware::require_auth))
}
