use crate::shared::api_utils::{get_json, post_no_content};
use contracts::dashboards::d400_shop_overview::dto::DashboardResponse;

pub async fn get_dashboard() -> Result<DashboardResponse, String> {
    get_json("/api/dashboard").await
}

/// Seeds the demo customers, jobs, challans, invoices and registers
pub async fn load_demo_data() -> Result<(), String> {
    post_no_content("/api/testdata", &()).await
}
