use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub tool_id: String,
    pub name: String,
    pub last_purchase_cost: f64,
    pub useful_life_hours: f64,
    pub current_usage_hours: f64,
}

impl AggregateRoot for Tool {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn table_name() -> &'static str {
        "tooling"
    }

    fn element_name() -> &'static str {
        "Tool"
    }

    fn list_name() -> &'static str {
        "Tooling"
    }
}

impl Tool {
    /// Hours left before the tool is worn out, never negative
    pub fn remaining_life_hours(&self) -> f64 {
        (self.useful_life_hours - self.current_usage_hours).max(0.0)
    }
}
