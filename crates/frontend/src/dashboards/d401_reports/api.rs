use crate::shared::api_utils::get_json;
use contracts::dashboards::d401_reports::dto::{JobReportRow, MonthlyTurnoverRow, PendingChallanRow};

pub async fn monthly_turnover() -> Result<Vec<MonthlyTurnoverRow>, String> {
    get_json("/api/reports/monthly-turnover").await
}

pub async fn jobs() -> Result<Vec<JobReportRow>, String> {
    get_json("/api/reports/jobs").await
}

pub async fn pending_challans() -> Result<Vec<PendingChallanRow>, String> {
    get_json("/api/reports/pending-challans").await
}
