use crate::domain::a005_job::aggregate::{Job, JobStatus};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Months shown in the turnover chart
pub const TURNOVER_MONTHS: usize = 6;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub open_jobs: usize,
    pub completed_jobs: usize,
    pub monthly_turnover: f64,
    pub pending_challans: usize,
    /// Percent of machines referenced by running jobs
    pub machine_utilization: i32,
    pub receivables: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnoverPoint {
    /// "YYYY-MM"
    pub month: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub turnover: Vec<TurnoverPoint>,
    pub jobs_by_status: Vec<StatusCount>,
}

impl DashboardResponse {
    /// Bar width in percent relative to the best month
    pub fn bar_width(&self, amount: f64) -> f64 {
        let max = self
            .turnover
            .iter()
            .map(|p| p.amount)
            .fold(1.0_f64, f64::max);
        (amount / max * 100.0).clamp(0.0, 100.0)
    }
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// The `n` months ending with the month of `today`, oldest first
pub fn last_n_months(today: NaiveDate, n: usize) -> Vec<String> {
    let mut year = today.year();
    let mut month = today.month() as i32;
    let mut keys = Vec::with_capacity(n);
    for _ in 0..n {
        keys.push(format!("{:04}-{:02}", year, month));
        month -= 1;
        if month == 0 {
            month = 12;
            year -= 1;
        }
    }
    keys.reverse();
    keys
}

/// Sums amounts per "YYYY-MM", ascending by month
pub fn group_turnover(entries: impl IntoIterator<Item = (NaiveDate, f64)>) -> Vec<TurnoverPoint> {
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    for (date, amount) in entries {
        *by_month.entry(month_key(date)).or_insert(0.0) += amount;
    }
    by_month
        .into_iter()
        .map(|(month, amount)| TurnoverPoint { month, amount })
        .collect()
}

/// Fixed window of months, missing months as zero
pub fn turnover_window(points: &[TurnoverPoint], today: NaiveDate, n: usize) -> Vec<TurnoverPoint> {
    last_n_months(today, n)
        .into_iter()
        .map(|month| {
            let amount = points
                .iter()
                .find(|p| p.month == month)
                .map(|p| p.amount)
                .unwrap_or(0.0);
            TurnoverPoint { month, amount }
        })
        .collect()
}

pub fn status_counts(jobs: &[Job]) -> Vec<StatusCount> {
    JobStatus::all()
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: jobs.iter().filter(|j| j.status == status).count(),
        })
        .collect()
}

/// Distinct machines on the routes of in-progress jobs over all machines, rounded
pub fn machine_utilization(jobs: &[Job], machine_count: usize) -> i32 {
    if machine_count == 0 {
        return 0;
    }
    let busy: BTreeSet<&str> = jobs
        .iter()
        .filter(|j| j.status == JobStatus::InProgress)
        .flat_map(|j| j.route.iter())
        .map(|op| op.machine_id.trim())
        .filter(|id| !id.is_empty())
        .collect();
    (busy.len() as f64 / machine_count as f64 * 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_job::aggregate::{JobDto, RouteOp};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn job(status: JobStatus, machines: &[&str]) -> Job {
        let dto = JobDto {
            job_id: "CNC-2025-001".into(),
            customer_id: Some(1),
            part_no: "P1".into(),
            qty_ordered: 10,
            due_date: Some(d(2025, 11, 1)),
            route: machines
                .iter()
                .map(|m| RouteOp {
                    op_name: "Op".into(),
                    machine_id: m.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        let mut job = Job::new_for_insert(&dto).unwrap();
        job.status = status;
        job
    }

    #[test]
    fn months_wrap_year_boundary() {
        assert_eq!(
            last_n_months(d(2025, 2, 14), 3),
            vec!["2024-12", "2025-01", "2025-02"]
        );
    }

    #[test]
    fn turnover_groups_by_month() {
        let points = group_turnover(vec![
            (d(2025, 10, 26), 5900.0),
            (d(2025, 9, 2), 100.0),
            (d(2025, 10, 1), 8850.0),
        ]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].month, "2025-09");
        assert_eq!(points[1].amount, 14750.0);

        let window = turnover_window(&points, d(2025, 10, 31), TURNOVER_MONTHS);
        assert_eq!(window.len(), 6);
        assert_eq!(window[0].month, "2025-05");
        assert_eq!(window[0].amount, 0.0);
        assert_eq!(window[5].amount, 14750.0);
    }

    #[test]
    fn utilization_counts_distinct_busy_machines() {
        let jobs = vec![
            job(JobStatus::InProgress, &["1", "2"]),
            job(JobStatus::InProgress, &["2", ""]),
            job(JobStatus::Pending, &["3"]),
        ];
        assert_eq!(machine_utilization(&jobs, 3), 67);
        assert_eq!(machine_utilization(&jobs, 0), 0);
    }

    #[test]
    fn counts_cover_every_status() {
        let jobs = vec![job(JobStatus::Completed, &[]), job(JobStatus::Completed, &[])];
        let counts = status_counts(&jobs);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[3].count, 2);
        assert_eq!(counts[0].count, 0);
    }
}
