use crate::shared::components::register_page::{quantity_column, RegisterPage};
use crate::shared::data_table::Column;
use crate::shared::number_format::format_quantity;
use contracts::domain::a012_inventory_item::aggregate::InventoryItem;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<InventoryItem>> {
    vec![
        Column::new("item_id", "Item ID"),
        Column::new("name", "Name"),
        Column::new("batch_no", "Batch"),
        Column::new("qty_on_hand", "Qty on Hand").with_format(|_, item: &InventoryItem| {
            let text = format_quantity(item.qty_on_hand);
            if item.needs_reorder() {
                view! { <span class="text-error" title="Below reorder point">{text}</span> }.into_any()
            } else {
                text.into_any()
            }
        }),
        Column::new("location", "Location"),
        quantity_column("reorder_point", "Reorder Point"),
    ]
}

#[component]
pub fn InventoryRegister() -> impl IntoView {
    view! { <RegisterPage title=InventoryItem::list_name() path="/api/inventory" columns=columns() /> }
}
