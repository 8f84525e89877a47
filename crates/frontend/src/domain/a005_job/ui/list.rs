use super::wizard::{JobWizard, JobWizardViewModel};
use crate::domain::a005_job::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::form_dialog::{DialogSize, FormDialog};
use crate::shared::icons::icon;
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Job>> {
    vec![
        Column::new("job_id", "Job ID"),
        Column::new("customers", "Customer").with_format(|_, job: &Job| {
            job.customers
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("part_no", "Part No"),
        Column::new("qty_ordered", "Qty Ordered"),
        Column::new("qty_completed", "Qty Completed"),
        Column::new("due_date", "Due Date")
            .with_format(|_, job: &Job| format_date(&job.due_date.to_string()).into_any()),
        Column::new("job_type", "Type"),
        Column::new("status", "Status").with_format(|_, job: &Job| {
            let variant = job.status.badge_variant();
            let label = job.status.label();
            view! { <Badge variant=variant>{label}</Badge> }
                .into_any()
        }),
    ]
}

#[component]
pub fn JobList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Job>::new());
    let error = RwSignal::new(None::<String>);
    let show_wizard = RwSignal::new(false);
    let vm = JobWizardViewModel::new();

    let load = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(data) => {
                    items.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    load();
    vm.load_lookups();

    let on_delete = Callback::new(move |job: Job| {
        if !confirm(&format!("Delete job {}?", job.job_id)) {
            return;
        }
        spawn_local(async move {
            match api::remove(job.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_saved = Callback::new(move |_| {
        show_wizard.set(false);
        load();
    });
    let on_close = Callback::new(move |_| show_wizard.set(false));

    view! {
        <div class="page">
            <PageHeader title=Job::list_name() subtitle="Manage job orders and work orders">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open_new();
                        show_wizard.set(true);
                    }
                >
                    {icon("plus")}
                    " Create Job"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_delete=on_delete />
            <FormDialog
                open=show_wizard
                on_close=on_close
                title="Create Job Order".to_string()
                size=DialogSize::Lg
            >
                <JobWizard vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}
