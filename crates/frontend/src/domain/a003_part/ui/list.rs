use super::details::{PartDetails, PartDetailsViewModel};
use crate::domain::a003_part::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::data_table::{Column, DataTable};
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use contracts::domain::a003_part::aggregate::{Part, PartDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Part>> {
    vec![
        Column::new("part_no", "Part No"),
        Column::new("rev", "Rev"),
        Column::new("description", "Description"),
        Column::new("material", "Material"),
        Column::new("client_part_no", "Client Part No"),
    ]
}

#[component]
pub fn PartList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Part>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let vm = PartDetailsViewModel::new();

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

    let on_edit = Callback::new(move |part: Part| {
        vm.open(part.to_dto());
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |part: Part| {
        if !confirm(&format!("Delete part {}?", part.part_no)) {
            return;
        }
        spawn_local(async move {
            match api::remove(part.id).await {
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
    let title = Signal::derive(move || {
        if vm.is_edit_mode() { "Edit Part".to_string() } else { "Add Part".to_string() }
    });

    view! {
        <div class="page">
            <PageHeader title=Part::list_name()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open(PartDto::default());
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Add Part"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_edit=on_edit on_delete=on_delete />
            <FormDialog open=show_modal on_close=on_close title=title>
                <PartDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}
