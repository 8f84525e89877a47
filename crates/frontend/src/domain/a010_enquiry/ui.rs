use crate::shared::components::register_page::RegisterPage;
use crate::shared::data_table::Column;
use crate::shared::number_format::format_money;
use contracts::domain::a010_enquiry::aggregate::Enquiry;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Enquiry>> {
    vec![
        Column::new("enquiry_id", "Enquiry ID"),
        Column::new("customers", "Customer").with_format(|_, e: &Enquiry| {
            e.customers
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("part_no", "Part"),
        Column::new("qty", "Qty"),
        Column::new("estimated_cost", "Est. Cost")
            .with_format(|_, e: &Enquiry| format_money(e.estimated_cost).into_any()),
        Column::new("status", "Status"),
    ]
}

#[component]
pub fn EnquiryRegister() -> impl IntoView {
    view! { <RegisterPage title=Enquiry::list_name() path="/api/enquiries" columns=columns() /> }
}
