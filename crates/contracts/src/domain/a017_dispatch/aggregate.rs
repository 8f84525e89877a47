use crate::domain::common::AggregateRoot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outbound shipment with LR and e-way bill references
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: i64,
    pub dispatch_id: String,
    pub job_id: String,
    pub lr_no: String,
    pub eway_bill_no: String,
    #[serde(default)]
    pub dispatch_date: Option<NaiveDate>,
    pub transporter_name: String,
}

impl AggregateRoot for Dispatch {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a017"
    }

    fn table_name() -> &'static str {
        "dispatch"
    }

    fn element_name() -> &'static str {
        "Dispatch"
    }

    fn list_name() -> &'static str {
        "Dispatch & Logistics"
    }
}
