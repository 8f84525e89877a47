use crate::dashboards::d401_reports::api;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::dashboards::d401_reports::dto::{
    JobReportRow, MonthlyTurnoverRow, PendingChallanRow, JOBS_REPORT_FILE, MONTHLY_TURNOVER_FILE,
    PENDING_CHALLANS_FILE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

impl CsvExportable for MonthlyTurnoverRow {
    fn headers() -> Vec<&'static str> {
        vec!["month", "invoice_count", "amount"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            self.invoice_count.to_string(),
            format!("{:.2}", self.amount),
        ]
    }
}

impl CsvExportable for JobReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["id", "job_id", "customer", "status", "total_cost"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.job_id.clone(),
            self.customer_name.clone(),
            self.status.clone(),
            format!("{:.2}", self.total_cost),
        ]
    }
}

impl CsvExportable for PendingChallanRow {
    fn headers() -> Vec<&'static str> {
        vec!["id", "challan_no", "job_id", "customer", "status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.challan_no.clone(),
            self.job_id.clone(),
            self.customer_name.clone(),
            self.status.clone(),
        ]
    }
}

/// One report tile: caption, row count and an export button
#[component]
fn ReportCard(
    title: &'static str,
    #[prop(into)] count_text: Signal<String>,
    tone: &'static str,
    on_export: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=format!("card report-card report-card--{}", tone)>
            <div class="report-card__head">
                <div class="report-card__icon">{icon("file-text")}</div>
                <div>
                    <h3 class="card__title">{title}</h3>
                    <p class="report-card__count">{move || count_text.get()}</p>
                </div>
            </div>
            <button class="button button--primary report-card__export" on:click=move |_| on_export.run(())>
                {icon("download")}
                " Export CSV"
            </button>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let turnover = RwSignal::new(Vec::<MonthlyTurnoverRow>::new());
    let jobs = RwSignal::new(Vec::<JobReportRow>::new());
    let challans = RwSignal::new(Vec::<PendingChallanRow>::new());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let loaded = async {
            turnover.set(api::monthly_turnover().await?);
            jobs.set(api::jobs().await?);
            challans.set(api::pending_challans().await?);
            Ok::<(), String>(())
        };
        if let Err(e) = loaded.await {
            error.set(Some(e));
        }
    });

    let export_turnover = Callback::new(move |_| {
        if let Err(e) = turnover.with_untracked(|rows| export_to_csv(rows, MONTHLY_TURNOVER_FILE)) {
            error.set(Some(e));
        }
    });
    let export_jobs = Callback::new(move |_| {
        if let Err(e) = jobs.with_untracked(|rows| export_to_csv(rows, JOBS_REPORT_FILE)) {
            error.set(Some(e));
        }
    });
    let export_challans = Callback::new(move |_| {
        if let Err(e) = challans.with_untracked(|rows| export_to_csv(rows, PENDING_CHALLANS_FILE)) {
            error.set(Some(e));
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Reports" subtitle="Generate and export reports" />
            <ErrorBanner error=error />
            <div class="report-grid">
                <ReportCard
                    title="Monthly Turnover"
                    count_text=Signal::derive(move || format!("{} months", turnover.with(|r| r.len())))
                    tone="primary"
                    on_export=export_turnover
                />
                <ReportCard
                    title="Job Cost Summary"
                    count_text=Signal::derive(move || format!("{} jobs", jobs.with(|r| r.len())))
                    tone="success"
                    on_export=export_jobs
                />
                <ReportCard
                    title="Pending Challans"
                    count_text=Signal::derive(move || format!("{} pending", challans.with(|r| r.len())))
                    tone="warning"
                    on_export=export_challans
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn turnover_csv_has_two_decimal_amounts() {
        let rows = vec![
            MonthlyTurnoverRow { month: "2025-09".into(), invoice_count: 1, amount: 8850.0 },
            MonthlyTurnoverRow { month: "2025-10".into(), invoice_count: 2, amount: 14750.5 },
        ];
        assert_eq!(
            build_csv(&rows),
            "month,invoice_count,amount\n2025-09,1,8850.00\n2025-10,2,14750.50"
        );
    }

    #[test]
    fn customer_names_with_commas_are_quoted() {
        let rows = vec![JobReportRow {
            id: 1,
            job_id: "CNC-2025-001".into(),
            customer_name: "Tata Motors, Pune".into(),
            status: "completed".into(),
            total_cost: 4500.0,
        }];
        assert_eq!(
            build_csv(&rows),
            "id,job_id,customer,status,total_cost\n1,CNC-2025-001,\"Tata Motors, Pune\",completed,4500.00"
        );
    }
}
