use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Inspection {
    pub id: i64,
    pub insp_id: String,
    pub job_id: String,
    pub insp_type: String,
    pub result: String,
    pub remarks: String,
}

impl AggregateRoot for Inspection {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a014"
    }

    fn table_name() -> &'static str {
        "inspections"
    }

    fn element_name() -> &'static str {
        "Inspection"
    }

    fn list_name() -> &'static str {
        "Quality Management"
    }
}
