use super::details::{ChallanDetails, ChallanDetailsViewModel};
use crate::domain::a006_challan::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::{format_date, format_opt_date, today};
use crate::shared::form_dialog::{DialogSize, FormDialog};
use crate::shared::icons::icon;
use contracts::domain::a006_challan::aggregate::{Challan, ChallanStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn pending_count(challans: &[Challan]) -> usize {
    challans
        .iter()
        .filter(|c| c.status == ChallanStatus::Sent)
        .count()
}

fn columns() -> Vec<Column<Challan>> {
    vec![
        Column::new("challan_no", "Challan No"),
        Column::new("job_id", "Job ID"),
        Column::new("customers", "Customer").with_format(|_, c: &Challan| {
            c.customers
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("qty_sent", "Qty Sent"),
        Column::new("process_type", "Process"),
        Column::new("date_sent", "Date Sent")
            .with_format(|_, c: &Challan| format_date(&c.date_sent.to_string()).into_any()),
        Column::new("expected_return_date", "Expected Return").with_format(|_, c: &Challan| {
            let text = format_opt_date(c.expected_return_date);
            if c.is_overdue(today()) {
                view! { <span class="text-error" title="Overdue">{text}</span> }.into_any()
            } else {
                text.into_any()
            }
        }),
        Column::new("status", "Status").with_format(|_, c: &Challan| {
            let variant = c.status.badge_variant();
            let label = c.status.as_str();
            view! { <Badge variant=variant>{label}</Badge> }.into_any()
        }),
    ]
}

#[component]
pub fn ChallanList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Challan>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let vm = ChallanDetailsViewModel::new();

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

    // Viewing a challan still at the plater offers to receive it
    let on_view = Callback::new(move |challan: Challan| {
        if challan.status != ChallanStatus::Sent {
            return;
        }
        if !confirm(&format!("Mark challan {} as received?", challan.challan_no)) {
            return;
        }
        spawn_local(async move {
            match api::receive(challan.id).await {
                Ok(_) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_delete = Callback::new(move |challan: Challan| {
        if !confirm(&format!("Delete challan {}?", challan.challan_no)) {
            return;
        }
        spawn_local(async move {
            match api::remove(challan.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_saved = Callback::new(move |_| {
        show_modal.set(false);
        load();
    });
    let on_close = Callback::new(move |_| show_modal.set(false));
    let subtitle = Signal::derive(move || {
        Some(format!("{} pending", items.with(|list| pending_count(list))))
    });

    view! {
        <div class="page">
            <PageHeader title=Challan::list_name() subtitle=subtitle>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open_new();
                        vm.load_jobs();
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Create Challan"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_view=on_view on_delete=on_delete />
            <FormDialog
                open=show_modal
                on_close=on_close
                title="Create Delivery Challan".to_string()
                size=DialogSize::Lg
            >
                <ChallanDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_challan::aggregate::ChallanDto;

    fn challan(no: &str, status: ChallanStatus) -> Challan {
        let mut c = Challan::new_for_insert(&ChallanDto {
            challan_no: no.into(),
            job_id: "PLT-2025-001".into(),
            customer_id: Some(1),
            qty_sent: 10,
            date_sent: chrono::NaiveDate::from_ymd_opt(2025, 10, 1),
            ..Default::default()
        })
        .unwrap();
        c.status = status;
        c
    }

    #[test]
    fn only_sent_challans_are_pending() {
        let list = vec![
            challan("CH-2025-001", ChallanStatus::Sent),
            challan("CH-2025-002", ChallanStatus::Received),
            challan("CH-2025-003", ChallanStatus::Sent),
        ];
        assert_eq!(pending_count(&list), 2);
        assert_eq!(pending_count(&[]), 0);
    }
}
