use crate::shared::components::register_page::RegisterPage;
use crate::shared::data_table::Column;
use contracts::domain::a014_inspection::aggregate::Inspection;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Inspection>> {
    vec![
        Column::new("insp_id", "Inspection ID"),
        Column::new("job_id", "Job ID"),
        Column::new("insp_type", "Type"),
        Column::new("result", "Result"),
        Column::new("remarks", "Remarks"),
    ]
}

#[component]
pub fn InspectionRegister() -> impl IntoView {
    view! { <RegisterPage title=Inspection::list_name() path="/api/inspections" columns=columns() /> }
}
