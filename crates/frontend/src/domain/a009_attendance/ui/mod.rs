mod daily;
mod details;
mod monthly;
mod page;

pub use page::AttendanceManagementPage;
