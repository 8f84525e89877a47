use std::collections::BTreeMap;

use anyhow::Result;
use contracts::dashboards::d400_shop_overview::dto::month_key;
use contracts::dashboards::d401_reports::dto::{JobReportRow, MonthlyTurnoverRow, PendingChallanRow};
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::a006_challan::aggregate::{Challan, ChallanStatus};
use contracts::domain::a007_invoice::aggregate::Invoice;
use contracts::shared::money::round2;

use crate::domain::{a005_job, a006_challan, a007_invoice};

const UNKNOWN_CUSTOMER: &str = "";

/// Invoice totals per "YYYY-MM", newest month first
pub fn monthly_turnover_rows(invoices: &[Invoice]) -> Vec<MonthlyTurnoverRow> {
    let mut by_month: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for invoice in invoices {
        let entry = by_month.entry(month_key(invoice.invoice_date)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += invoice.total_amount;
    }
    by_month
        .into_iter()
        .rev()
        .map(|(month, (invoice_count, amount))| MonthlyTurnoverRow {
            month,
            invoice_count,
            amount: round2(amount),
        })
        .collect()
}

pub fn job_rows(jobs: &[Job]) -> Vec<JobReportRow> {
    jobs.iter()
        .map(|job| JobReportRow {
            id: job.id,
            job_id: job.job_id.clone(),
            customer_name: job
                .customers
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            status: job.status.as_str().to_string(),
            total_cost: job.total_cost,
        })
        .collect()
}

pub fn pending_challan_rows(challans: &[Challan]) -> Vec<PendingChallanRow> {
    challans
        .iter()
        .filter(|c| c.status == ChallanStatus::Sent)
        .map(|c| PendingChallanRow {
            id: c.id,
            challan_no: c.challan_no.clone(),
            job_id: c.job_id.clone(),
            customer_name: c
                .customers
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            status: c.status.as_str().to_string(),
        })
        .collect()
}

pub async fn monthly_turnover() -> Result<Vec<MonthlyTurnoverRow>> {
    Ok(monthly_turnover_rows(&a007_invoice::repository::list_all().await?))
}

pub async fn jobs() -> Result<Vec<JobReportRow>> {
    Ok(job_rows(&a005_job::service::list_all().await?))
}

pub async fn pending_challans() -> Result<Vec<PendingChallanRow>> {
    Ok(pending_challan_rows(&a006_challan::service::list_pending().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a007_invoice::aggregate::InvoiceDto;

    fn invoice(y: i32, m: u32, taxable: f64) -> Invoice {
        Invoice::new_for_insert(&InvoiceDto {
            invoice_no: "INV-1".into(),
            job_id: "CNC-1".into(),
            customer_id: Some(1),
            invoice_date: NaiveDate::from_ymd_opt(y, m, 10),
            taxable_amount: taxable,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn turnover_groups_by_month_newest_first() {
        let rows = monthly_turnover_rows(&[
            invoice(2026, 9, 1000.0),
            invoice(2026, 10, 5000.0),
            invoice(2026, 9, 500.0),
        ]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, "2026-10");
        assert_eq!(rows[0].amount, 5900.0);
        assert_eq!(rows[1].invoice_count, 2);
        assert_eq!(rows[1].amount, 1770.0);
    }

    #[test]
    fn no_invoices_no_rows() {
        assert!(monthly_turnover_rows(&[]).is_empty());
    }
}
