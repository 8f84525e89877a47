//! Captions for every page. Entity pages take theirs from the aggregates.

use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a003_part::aggregate::Part;
use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::a006_challan::aggregate::Challan;
use contracts::domain::a007_invoice::aggregate::Invoice;
use contracts::domain::a008_attendance_log::aggregate::AttendanceLog;
use contracts::domain::a009_attendance::aggregate::AttendanceRecord;
use contracts::domain::a010_enquiry::aggregate::Enquiry;
use contracts::domain::a011_operation::aggregate::Operation;
use contracts::domain::a012_inventory_item::aggregate::InventoryItem;
use contracts::domain::a013_tool::aggregate::Tool;
use contracts::domain::a014_inspection::aggregate::Inspection;
use contracts::domain::a015_maintenance::aggregate::MaintenanceEntry;
use contracts::domain::a016_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a017_dispatch::aggregate::Dispatch;
use contracts::domain::a018_expense::aggregate::Expense;
use contracts::domain::common::AggregateRoot;

/// Page caption for a route key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "dashboard" => "Dashboard",
        "customers" => Customer::list_name(),
        "employees" => Employee::list_name(),
        "parts" => Part::list_name(),
        "machines" => Machine::list_name(),
        "enquiries" => Enquiry::list_name(),
        "jobs" => Job::list_name(),
        "routing" => Operation::list_name(),
        "shop-floor" => "Shop Floor",
        "inventory" => InventoryItem::list_name(),
        "tooling" => Tool::list_name(),
        "challans" => Challan::list_name(),
        "quality" => Inspection::list_name(),
        "maintenance" => MaintenanceEntry::list_name(),
        "purchase" => PurchaseOrder::list_name(),
        "billing" => Invoice::list_name(),
        "dispatch" => Dispatch::list_name(),
        "attendance" => AttendanceLog::list_name(),
        "attendance-management" => AttendanceRecord::list_name(),
        "expenses" => Expense::list_name(),
        "reports" => "Reports",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTE_KEYS;

    #[test]
    fn every_route_has_a_label() {
        for key in ROUTE_KEYS {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("nope"), "");
    }
}
