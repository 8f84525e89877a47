use super::details::{CustomerDetails, CustomerDetailsViewModel};
use crate::domain::a001_customer::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::data_table::{Column, DataTable};
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Customer>> {
    vec![
        Column::new("name", "Name"),
        Column::new("gstin", "GSTIN"),
        Column::new("contact_person", "Contact"),
        Column::new("phone", "Phone"),
        Column::new("credit_days", "Credit Days"),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Customer>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let vm = CustomerDetailsViewModel::new();

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

    let on_edit = Callback::new(move |customer: Customer| {
        vm.open_edit(customer.to_dto());
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |customer: Customer| {
        if !confirm(&format!("Delete customer {}?", customer.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(customer.id).await {
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

    view! {
        <div class="page">
            <PageHeader title=Customer::list_name()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open_new();
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Add Customer"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_edit=on_edit on_delete=on_delete />
            <FormDialog open=show_modal on_close=on_close title=Signal::derive(move || vm.title())>
                <CustomerDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}
