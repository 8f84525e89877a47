use axum::Json;
use contracts::dashboards::d400_shop_overview::dto::DashboardResponse;
use contracts::dashboards::d401_reports::dto::{JobReportRow, MonthlyTurnoverRow, PendingChallanRow};

use crate::dashboards::{d400_shop_overview, d401_reports};
use crate::shared::error::{error_response, ApiResult};

/// GET /api/dashboard
pub async fn dashboard() -> ApiResult<DashboardResponse> {
    d400_shop_overview::service::get_dashboard()
        .await
        .map(Json)
        .map_err(|e| error_response("dashboard", &e))
}

/// GET /api/reports/monthly-turnover
pub async fn monthly_turnover() -> ApiResult<Vec<MonthlyTurnoverRow>> {
    d401_reports::service::monthly_turnover()
        .await
        .map(Json)
        .map_err(|e| error_response("monthly turnover report", &e))
}

/// GET /api/reports/jobs
pub async fn jobs() -> ApiResult<Vec<JobReportRow>> {
    d401_reports::service::jobs()
        .await
        .map(Json)
        .map_err(|e| error_response("jobs report", &e))
}

/// GET /api/reports/pending-challans
pub async fn pending_challans() -> ApiResult<Vec<PendingChallanRow>> {
    d401_reports::service::pending_challans()
        .await
        .map(Json)
        .map_err(|e| error_response("pending challans report", &e))
}
