use crate::domain::common::AggregateRoot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub expense_id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: f64,
    pub vendor: String,
    pub description: String,
}

impl AggregateRoot for Expense {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a018"
    }

    fn table_name() -> &'static str {
        "expenses"
    }

    fn element_name() -> &'static str {
        "Expense"
    }

    fn list_name() -> &'static str {
        "Expenses"
    }
}
