use crate::shared::components::register_page::{quantity_column, RegisterPage};
use crate::shared::data_table::Column;
use crate::shared::number_format::format_money;
use contracts::domain::a013_tool::aggregate::Tool;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Tool>> {
    vec![
        Column::new("tool_id", "Tool ID"),
        Column::new("name", "Name"),
        Column::new("last_purchase_cost", "Cost")
            .with_format(|_, t: &Tool| format_money(t.last_purchase_cost).into_any()),
        quantity_column("useful_life_hours", "Life (hrs)"),
        quantity_column("current_usage_hours", "Usage (hrs)"),
    ]
}

#[component]
pub fn ToolRegister() -> impl IntoView {
    view! { <RegisterPage title=Tool::list_name() path="/api/tooling" columns=columns() /> }
}
