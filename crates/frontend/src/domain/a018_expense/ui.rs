use crate::shared::components::register_page::RegisterPage;
use crate::shared::data_table::Column;
use crate::shared::date_utils::format_opt_date;
use crate::shared::number_format::format_money;
use contracts::domain::a018_expense::aggregate::Expense;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<Expense>> {
    vec![
        Column::new("expense_id", "Expense ID"),
        Column::new("date", "Date").with_format(|_, e: &Expense| format_opt_date(e.date).into_any()),
        Column::new("category", "Category"),
        Column::new("amount", "Amount").with_format(|_, e: &Expense| format_money(e.amount).into_any()),
        Column::new("vendor", "Vendor"),
        Column::new("description", "Description"),
    ]
}

#[component]
pub fn ExpenseRegister() -> impl IntoView {
    view! { <RegisterPage title=Expense::list_name() path="/api/expenses" columns=columns() /> }
}
