//! Route key to page view. Every navigable page is listed here.

use crate::dashboards::d400_shop_overview::ui::ShopOverviewDashboard;
use crate::dashboards::d401_reports::ui::ReportsPage;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_part::ui::list::PartList;
use crate::domain::a004_machine::ui::list::MachineList;
use crate::domain::a005_job::ui::list::JobList;
use crate::domain::a005_job::ui::shop_floor::ShopFloorBoard;
use crate::domain::a006_challan::ui::list::ChallanList;
use crate::domain::a007_invoice::ui::list::InvoiceList;
use crate::domain::a008_attendance_log::ui::AttendanceLogPage;
use crate::domain::a009_attendance::ui::AttendanceManagementPage;
use crate::domain::a010_enquiry::ui::EnquiryRegister;
use crate::domain::a011_operation::ui::OperationRegister;
use crate::domain::a012_inventory_item::ui::InventoryRegister;
use crate::domain::a013_tool::ui::ToolRegister;
use crate::domain::a014_inspection::ui::InspectionRegister;
use crate::domain::a015_maintenance::ui::MaintenanceRegister;
use crate::domain::a016_purchase_order::ui::PurchaseOrderRegister;
use crate::domain::a017_dispatch::ui::DispatchRegister;
use crate::domain::a018_expense::ui::ExpenseRegister;
use leptos::prelude::*;

pub const NOT_FOUND_TEXT: &str = "Page not found";

/// Renders the page for a route key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <ShopOverviewDashboard /> }.into_any(),

        // Masters
        "customers" => view! { <CustomerList /> }.into_any(),
        "employees" => view! { <EmployeeList /> }.into_any(),
        "parts" => view! { <PartList /> }.into_any(),
        "machines" => view! { <MachineList /> }.into_any(),

        // Production
        "jobs" => view! { <JobList /> }.into_any(),
        "shop-floor" => view! { <ShopFloorBoard /> }.into_any(),
        "challans" => view! { <ChallanList /> }.into_any(),
        "billing" => view! { <InvoiceList /> }.into_any(),

        // Attendance
        "attendance" => view! { <AttendanceLogPage /> }.into_any(),
        "attendance-management" => view! { <AttendanceManagementPage /> }.into_any(),

        // Registers
        "enquiries" => view! { <EnquiryRegister /> }.into_any(),
        "routing" => view! { <OperationRegister /> }.into_any(),
        "inventory" => view! { <InventoryRegister /> }.into_any(),
        "tooling" => view! { <ToolRegister /> }.into_any(),
        "quality" => view! { <InspectionRegister /> }.into_any(),
        "maintenance" => view! { <MaintenanceRegister /> }.into_any(),
        "purchase" => view! { <PurchaseOrderRegister /> }.into_any(),
        "dispatch" => view! { <DispatchRegister /> }.into_any(),
        "expenses" => view! { <ExpenseRegister /> }.into_any(),

        "reports" => view! { <ReportsPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">{NOT_FOUND_TEXT}</div> }.into_any()
        }
    }
}
