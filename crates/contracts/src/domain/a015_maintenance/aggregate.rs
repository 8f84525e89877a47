use crate::domain::common::{AggregateRoot, NameRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned or breakdown maintenance on a machine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub id: i64,
    pub maintenance_id: String,
    pub machine_id: i64,
    #[serde(rename = "type")]
    pub maintenance_type: String,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub downtime_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machines: Option<NameRef>,
}

impl AggregateRoot for MaintenanceEntry {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a015"
    }

    fn table_name() -> &'static str {
        "maintenance"
    }

    fn element_name() -> &'static str {
        "Maintenance Entry"
    }

    fn list_name() -> &'static str {
        "Maintenance"
    }
}

impl MaintenanceEntry {
    pub fn is_open(&self) -> bool {
        self.completed_date.is_none()
    }
}
