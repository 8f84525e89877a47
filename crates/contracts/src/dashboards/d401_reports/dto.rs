use serde::{Deserialize, Serialize};

pub const MONTHLY_TURNOVER_FILE: &str = "monthly_turnover.csv";
pub const JOBS_REPORT_FILE: &str = "jobs_report.csv";
pub const PENDING_CHALLANS_FILE: &str = "pending_challans.csv";

/// Invoice totals for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTurnoverRow {
    pub month: String,
    pub invoice_count: usize,
    pub amount: f64,
}

/// Job cost summary line, customer flattened to its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReportRow {
    pub id: i64,
    pub job_id: String,
    pub customer_name: String,
    pub status: String,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingChallanRow {
    pub id: i64,
    pub challan_no: String,
    pub job_id: String,
    pub customer_name: String,
    pub status: String,
}
