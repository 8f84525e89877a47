use crate::domain::common::{AggregateRoot, NameRef};
use serde::{Deserialize, Serialize};

/// Customer enquiry awaiting a quotation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: i64,
    pub enquiry_id: String,
    pub customer_id: i64,
    pub part_no: String,
    pub qty: i32,
    pub estimated_cost: f64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<NameRef>,
}

impl AggregateRoot for Enquiry {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn table_name() -> &'static str {
        "enquiries"
    }

    fn element_name() -> &'static str {
        "Enquiry"
    }

    fn list_name() -> &'static str {
        "Enquiries & Quotations"
    }
}
