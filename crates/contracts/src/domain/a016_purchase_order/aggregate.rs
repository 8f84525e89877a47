use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub po_no: String,
    pub supplier_name: String,
    pub item_description: String,
    pub qty: f64,
    pub total_amount: f64,
    pub status: String,
}

impl AggregateRoot for PurchaseOrder {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a016"
    }

    fn table_name() -> &'static str {
        "purchase_orders"
    }

    fn element_name() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }
}
