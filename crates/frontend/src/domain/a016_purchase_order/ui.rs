use crate::shared::components::register_page::{quantity_column, RegisterPage};
use crate::shared::data_table::Column;
use crate::shared::number_format::format_money;
use contracts::domain::a016_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<PurchaseOrder>> {
    vec![
        Column::new("po_no", "PO No"),
        Column::new("supplier_name", "Supplier"),
        Column::new("item_description", "Item"),
        quantity_column("qty", "Qty"),
        Column::new("total_amount", "Amount")
            .with_format(|_, po: &PurchaseOrder| format_money(po.total_amount).into_any()),
        Column::new("status", "Status"),
    ]
}

#[component]
pub fn PurchaseOrderRegister() -> impl IntoView {
    view! { <RegisterPage title=PurchaseOrder::list_name() path="/api/purchase-orders" columns=columns() /> }
}
