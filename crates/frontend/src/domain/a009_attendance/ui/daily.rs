use crate::shared::data_table::{Column, DataTable};
use contracts::domain::a009_attendance::aggregate::AttendanceRecord;
use contracts::domain::common::EmployeeRef;
use leptos::prelude::*;

fn employee_field(record: &AttendanceRecord, field: fn(&EmployeeRef) -> String) -> String {
    record.employee.as_ref().map(field).unwrap_or_default()
}

fn columns() -> Vec<Column<AttendanceRecord>> {
    vec![
        Column::new("employee", "Employee Code").with_format(|_, r: &AttendanceRecord| {
            employee_field(r, |e| e.employee_code.clone()).into_any()
        }),
        Column::new("employee_name", "Name")
            .with_format(|_, r: &AttendanceRecord| r.employee_name().to_string().into_any()),
        Column::new("department", "Department").with_format(|_, r: &AttendanceRecord| {
            employee_field(r, |e| e.department.clone()).into_any()
        }),
        Column::new("status", "Status").with_format(|_, r: &AttendanceRecord| {
            view! {
                <span class=format!("chip {}", r.status.color_class())>{r.status.label()}</span>
            }
            .into_any()
        }),
        Column::new("ot_hours", "OT Hours"),
        Column::new("notes", "Notes").with_format(|_, r: &AttendanceRecord| {
            if r.notes.is_empty() { "-".to_string() } else { r.notes.clone() }.into_any()
        }),
    ]
}

/// Marks for one date, already filtered by the search box
#[component]
pub fn DailyAttendance(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    on_edit: Callback<AttendanceRecord>,
    on_delete: Callback<AttendanceRecord>,
) -> impl IntoView {
    view! { <DataTable columns=columns() data=records on_edit=on_edit on_delete=on_delete /> }
}
