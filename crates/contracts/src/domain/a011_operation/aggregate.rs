use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Standard routing step for a part
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    pub id: i64,
    pub part_no: String,
    pub op_seq: i32,
    pub op_name: String,
    pub machine_type: String,
    pub setup_time_min: f64,
    pub run_time_per_piece_min: f64,
}

impl AggregateRoot for Operation {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn table_name() -> &'static str {
        "operations"
    }

    fn element_name() -> &'static str {
        "Routing Operation"
    }

    fn list_name() -> &'static str {
        "Routing & Operations"
    }
}
