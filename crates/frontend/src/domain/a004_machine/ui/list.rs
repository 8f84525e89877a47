use super::details::{MachineDetails, MachineDetailsViewModel};
use crate::domain::a004_machine::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_opt_date;
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use contracts::domain::a004_machine::aggregate::{Machine, MachineDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Machine>> {
    vec![
        Column::new("name", "Name"),
        Column::new("type", "Type"),
        Column::new("model", "Model"),
        Column::new("location", "Location"),
        Column::new("last_pm_date", "Last PM")
            .with_format(|_, m: &Machine| format_opt_date(m.last_pm_date).into_any()),
    ]
}

#[component]
pub fn MachineList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Machine>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let vm = MachineDetailsViewModel::new();

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

    let on_edit = Callback::new(move |machine: Machine| {
        vm.open(machine.to_dto());
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |machine: Machine| {
        if !confirm(&format!("Delete machine {}?", machine.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(machine.id).await {
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
            <PageHeader title=Machine::list_name()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open(MachineDto::default());
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Add Machine"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_edit=on_edit on_delete=on_delete />
            <FormDialog open=show_modal on_close=on_close title=Signal::derive(move || vm.title())>
                <MachineDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}
