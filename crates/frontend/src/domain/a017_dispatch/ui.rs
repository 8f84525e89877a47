use crate::shared::components::register_page::RegisterPage;
use crate::shared::data_table::Column;
use crate::shared::date_utils::format_opt_date;
use contracts::domain::a017_dispatch::aggregate::Dispatch;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Dispatch>> {
    vec![
        Column::new("dispatch_id", "Dispatch ID"),
        Column::new("job_id", "Job ID"),
        Column::new("lr_no", "LR No"),
        Column::new("eway_bill_no", "E-Way Bill"),
        Column::new("dispatch_date", "Dispatch Date")
            .with_format(|_, d: &Dispatch| format_opt_date(d.dispatch_date).into_any()),
        Column::new("transporter_name", "Transporter"),
    ]
}

#[component]
pub fn DispatchRegister() -> impl IntoView {
    view! { <RegisterPage title=Dispatch::list_name() path="/api/dispatch" columns=columns() /> }
}
