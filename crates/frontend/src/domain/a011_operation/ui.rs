use crate::shared::components::register_page::{quantity_column, RegisterPage};
use crate::shared::data_table::Column;
use contracts::domain::a011_operation::aggregate::Operation;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Operation>> {
    vec![
        Column::new("part_no", "Part No"),
        Column::new("op_seq", "Op Seq"),
        Column::new("op_name", "Operation"),
        Column::new("machine_type", "Machine Type"),
        quantity_column("setup_time_min", "Setup Time"),
        quantity_column("run_time_per_piece_min", "Run Time"),
    ]
}

#[component]
pub fn OperationRegister() -> impl IntoView {
    view! { <RegisterPage title=Operation::list_name() path="/api/operations" columns=columns() /> }
}
