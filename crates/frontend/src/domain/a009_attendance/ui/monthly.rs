use crate::shared::data_table::{Column, DataTable};
use contracts::domain::a009_attendance::summary::AttendanceSummary;
use leptos::prelude::*;

fn columns() -> Vec<Column<AttendanceSummary>> {
    vec![
        Column::new("employee", "Employee Code").with_format(|_, s: &AttendanceSummary| {
            s.employee
                .as_ref()
                .map(|e| e.employee_code.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("employee_name", "Name")
            .with_format(|_, s: &AttendanceSummary| s.employee_name().to_string().into_any()),
        Column::new("total_working_days", "Working Days"),
        Column::new("total_present_days", "Present"),
        Column::new("total_absent_days", "Absent"),
        Column::new("total_leaves", "Leaves"),
        Column::new("total_ot_hours", "OT Hours"),
        Column::new("percentage", "Attendance %").with_format(|_, s: &AttendanceSummary| {
            view! { <span class=s.band().color_class()>{format!("{}%", s.percentage())}</span> }
                .into_any()
        }),
    ]
}

#[component]
pub fn MonthlySummary(#[prop(into)] summaries: Signal<Vec<AttendanceSummary>>) -> impl IntoView {
    view! { <DataTable columns=columns() data=summaries actions=false /> }
}
