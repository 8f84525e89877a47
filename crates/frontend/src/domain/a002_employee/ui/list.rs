use super::details::{EmployeeDetails, EmployeeDetailsViewModel};
use crate::domain::a002_employee::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{raw_cell_text, Column, DataTable};
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn columns() -> Vec<Column<Employee>> {
    vec![
        Column::new("employee_code", "Code"),
        Column::new("name", "Name"),
        Column::new("role", "Role"),
        Column::new("department", "Department"),
        Column::new("shift", "Shift"),
        Column::new("skill_level", "Skill"),
        Column::new("status", "Status").with_format(|value, employee: &Employee| {
            let variant = if employee.is_active() { "success" } else { "neutral" };
            let text = raw_cell_text(Some(value));
            view! { <Badge variant=variant>{text}</Badge> }.into_any()
        }),
    ]
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Employee>::new());
    let error = RwSignal::new(None::<String>);
    let show_modal = RwSignal::new(false);
    let vm = EmployeeDetailsViewModel::new();

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

    let on_edit = Callback::new(move |employee: Employee| {
        vm.open(employee.to_dto());
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |employee: Employee| {
        if !confirm(&format!("Delete employee {}?", employee.name)) {
            return;
        }
        spawn_local(async move {
            match api::remove(employee.id).await {
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
            <PageHeader title=Employee::list_name()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open(EmployeeDto::default());
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Add Employee"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns() data=items on_edit=on_edit on_delete=on_delete />
            <FormDialog open=show_modal on_close=on_close title=Signal::derive(move || vm.title())>
                <EmployeeDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}
