use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub item_id: String,
    pub name: String,
    pub batch_no: String,
    pub qty_on_hand: f64,
    pub location: String,
    pub reorder_point: f64,
}

impl AggregateRoot for InventoryItem {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn table_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

impl InventoryItem {
    pub fn needs_reorder(&self) -> bool {
        self.qty_on_hand <= self.reorder_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_at_or_below_point() {
        let mut item = InventoryItem {
            qty_on_hand: 50.0,
            reorder_point: 20.0,
            ..Default::default()
        };
        assert!(!item.needs_reorder());
        item.qty_on_hand = 20.0;
        assert!(item.needs_reorder());
    }
}
