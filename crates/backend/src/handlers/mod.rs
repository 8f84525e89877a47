pub mod a001_customer;
pub mod a002_employee;
pub mod a003_part;
pub mod a004_machine;
pub mod a005_job;
pub mod a006_challan;
pub mod a007_invoice;
pub mod a008_attendance_log;
pub mod a009_attendance;
pub mod registers;
pub mod reports;
pub mod testdata;
