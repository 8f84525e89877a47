pub mod a001_customer;
pub mod a002_employee;
pub mod a003_part;
pub mod a004_machine;
pub mod a005_job;
pub mod a006_challan;
pub mod a007_invoice;
pub mod a008_attendance_log;
pub mod a009_attendance;
pub mod a010_enquiry;
pub mod a011_operation;
pub mod a012_inventory_item;
pub mod a013_tool;
pub mod a014_inspection;
pub mod a015_maintenance;
pub mod a016_purchase_order;
pub mod a017_dispatch;
pub mod a018_expense;
