use anyhow::Result;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d400_shop_overview::dto::{
    group_turnover, machine_utilization, month_key, status_counts, turnover_window,
    DashboardMetrics, DashboardResponse, TURNOVER_MONTHS,
};
use contracts::domain::a005_job::aggregate::{Job, JobStatus};
use contracts::domain::a006_challan::aggregate::{Challan, ChallanStatus};
use contracts::domain::a007_invoice::aggregate::Invoice;

use crate::domain::{a004_machine, a005_job, a006_challan, a007_invoice};

/// Everything the dashboard shows, computed as of `today`
pub fn build_dashboard(
    jobs: &[Job],
    challans: &[Challan],
    invoices: &[Invoice],
    machine_count: usize,
    today: NaiveDate,
) -> DashboardResponse {
    let current_month = month_key(today);
    let points = group_turnover(invoices.iter().map(|i| (i.invoice_date, i.total_amount)));

    let metrics = DashboardMetrics {
        open_jobs: jobs.iter().filter(|j| j.status != JobStatus::Completed).count(),
        completed_jobs: jobs.iter().filter(|j| j.status == JobStatus::Completed).count(),
        monthly_turnover: points
            .iter()
            .find(|p| p.month == current_month)
            .map(|p| p.amount)
            .unwrap_or(0.0),
        pending_challans: challans
            .iter()
            .filter(|c| c.status == ChallanStatus::Sent)
            .count(),
        machine_utilization: machine_utilization(jobs, machine_count),
        receivables: invoices
            .iter()
            .filter(|i| i.is_outstanding())
            .map(|i| i.total_amount)
            .sum(),
    };

    DashboardResponse {
        metrics,
        turnover: turnover_window(&points, today, TURNOVER_MONTHS),
        jobs_by_status: status_counts(jobs),
    }
}

pub async fn get_dashboard() -> Result<DashboardResponse> {
    let jobs = a005_job::repository::list_all().await?;
    let challans = a006_challan::repository::list_all().await?;
    let invoices = a007_invoice::repository::list_all().await?;
    let machine_count = a004_machine::repository::count().await? as usize;

    Ok(build_dashboard(
        &jobs,
        &challans,
        &invoices,
        machine_count,
        Utc::now().date_naive(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_job::aggregate::{JobDto, RouteOp};
    use contracts::domain::a006_challan::aggregate::ChallanDto;
    use contracts::domain::a007_invoice::aggregate::InvoiceDto;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn job(job_id: &str, status: JobStatus, machine: &str) -> Job {
        let mut job = Job::new_for_insert(&JobDto {
            job_id: job_id.into(),
            customer_id: Some(1),
            part_no: "P1001".into(),
            qty_ordered: 10,
            due_date: Some(d(2026, 10, 30)),
            route: vec![RouteOp {
                machine_id: machine.into(),
                ..RouteOp::blank(10)
            }],
            ..Default::default()
        })
        .unwrap();
        job.status = status;
        job
    }

    fn invoice(date: NaiveDate, taxable: f64) -> Invoice {
        Invoice::new_for_insert(&InvoiceDto {
            invoice_no: "INV-2026-001".into(),
            job_id: "CNC-2026-001".into(),
            customer_id: Some(1),
            invoice_date: Some(date),
            taxable_amount: taxable,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn metrics_from_rows() {
        let jobs = vec![
            job("CNC-2026-001", JobStatus::InProgress, "1"),
            job("CNC-2026-002", JobStatus::InProgress, "1"),
            job("CNC-2026-003", JobStatus::Completed, "2"),
        ];
        let challan = Challan::new_for_insert(&ChallanDto {
            challan_no: "CH-2026-001".into(),
            job_id: "CNC-2026-001".into(),
            customer_id: Some(1),
            qty_sent: 5,
            date_sent: Some(d(2026, 10, 1)),
            ..Default::default()
        })
        .unwrap();
        let mut paid = invoice(d(2026, 10, 2), 1000.0);
        paid.mark_paid().unwrap();
        let invoices = vec![invoice(d(2026, 10, 5), 5000.0), paid, invoice(d(2026, 8, 1), 100.0)];

        let dash = build_dashboard(&jobs, &[challan], &invoices, 4, d(2026, 10, 18));
        assert_eq!(dash.metrics.open_jobs, 2);
        assert_eq!(dash.metrics.completed_jobs, 1);
        assert_eq!(dash.metrics.pending_challans, 1);
        assert_eq!(dash.metrics.machine_utilization, 25);
        assert!((dash.metrics.monthly_turnover - 7080.0).abs() < 1e-9);
        assert!((dash.metrics.receivables - 6018.0).abs() < 1e-9);
        assert_eq!(dash.turnover.len(), TURNOVER_MONTHS);
        assert_eq!(dash.turnover.last().unwrap().month, "2026-10");
    }

    #[test]
    fn empty_shop_has_zero_metrics() {
        let dash = build_dashboard(&[], &[], &[], 0, d(2026, 1, 1));
        assert_eq!(dash.metrics, DashboardMetrics::default());
        assert!(dash.turnover.iter().all(|p| p.amount == 0.0));
    }
}
