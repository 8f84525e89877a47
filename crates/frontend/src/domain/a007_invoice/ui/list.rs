use super::details::{InvoiceDetails, InvoiceDetailsViewModel};
use super::print::InvoicePrint;
use crate::domain::a007_invoice::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::form_dialog::{DialogSize, FormDialog};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a007_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sum of unpaid invoice totals
pub fn outstanding_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|i| i.is_outstanding())
        .map(|i| i.total_amount)
        .sum()
}

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("invoice_no", "Invoice No"),
        Column::new("job_id", "Job ID"),
        Column::new("customers", "Customer").with_format(|_, i: &Invoice| {
            i.customers
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("invoice_date", "Date")
            .with_format(|_, i: &Invoice| format_date(&i.invoice_date.to_string()).into_any()),
        Column::new("total_amount", "Total")
            .with_format(|_, i: &Invoice| format_money(i.total_amount).into_any()),
        Column::new("payment_status", "Status").with_format(|_, i: &Invoice| {
            let variant = i.payment_status.badge_variant();
            let label = i.payment_status.as_str().to_uppercase();
            view! {
                <Badge variant=variant>
                    {label}
                </Badge>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Invoice>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let printing = RwSignal::new(None::<Invoice>);
    let vm = InvoiceDetailsViewModel::new();

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

    let on_view = Callback::new(move |invoice: Invoice| printing.set(Some(invoice)));

    let on_mark_paid = Callback::new(move |invoice: Invoice| {
        spawn_local(async move {
            match api::mark_paid(invoice.id).await {
                Ok(updated) => {
                    printing.set(Some(updated));
                    load();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_delete = Callback::new(move |invoice: Invoice| {
        if !confirm(&format!("Delete invoice {}?", invoice.invoice_no)) {
            return;
        }
        spawn_local(async move {
            match api::remove(invoice.id).await {
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
    let close_print = Callback::new(move |_| printing.set(None));
    let print_open = Signal::derive(move || printing.with(|p| p.is_some()));
    let print_title = Signal::derive(move || {
        printing.with(|p| {
            p.as_ref()
                .map(|i| format!("Invoice {}", i.invoice_no))
                .unwrap_or_default()
        })
    });
    let subtitle = Signal::derive(move || {
        Some(format!(
            "{} outstanding",
            items.with(|list| format_money(outstanding_total(list)))
        ))
    });

    view! {
        <div class="page">
            <PageHeader title=Invoice::list_name() subtitle=subtitle>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open_new();
                        vm.load_lookups();
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Create Invoice"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_view=on_view on_delete=on_delete />
            <FormDialog open=show_modal on_close=on_close title="Create Invoice".to_string()>
                <InvoiceDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
            <FormDialog open=print_open on_close=close_print title=print_title size=DialogSize::Lg>
                {move || printing.get().map(|invoice| view! {
                    <InvoicePrint invoice=invoice on_mark_paid=on_mark_paid />
                })}
            </FormDialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_invoice::aggregate::{InvoiceDto, PaymentStatus};

    fn invoice(taxable: f64, status: PaymentStatus) -> Invoice {
        let mut i = Invoice::new_for_insert(&InvoiceDto {
            invoice_no: "INV-2025-001".into(),
            job_id: "CNC-2025-001".into(),
            customer_id: Some(1),
            invoice_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 26),
            taxable_amount: taxable,
            ..Default::default()
        })
        .unwrap();
        i.payment_status = status;
        i
    }

    #[test]
    fn only_pending_totals_are_outstanding() {
        let list = vec![
            invoice(5000.0, PaymentStatus::Pending),
            invoice(7500.0, PaymentStatus::Paid),
        ];
        assert_eq!(outstanding_total(&list), 5900.0);
    }
}
