use crate::shared::components::register_page::{quantity_column, RegisterPage};
use crate::shared::data_table::Column;
use crate::shared::date_utils::format_opt_date;
use contracts::domain::a015_maintenance::aggregate::MaintenanceEntry;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

fn columns() -> Vec<Column<MaintenanceEntry>> {
    vec![
        Column::new("maintenance_id", "Maintenance ID"),
        Column::new("machines", "Machine").with_format(|_, m: &MaintenanceEntry| {
            m.machines
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_default()
                .into_any()
        }),
        Column::new("type", "Type"),
        Column::new("scheduled_date", "Scheduled")
            .with_format(|_, m: &MaintenanceEntry| format_opt_date(m.scheduled_date).into_any()),
        Column::new("completed_date", "Completed")
            .with_format(|_, m: &MaintenanceEntry| format_opt_date(m.completed_date).into_any()),
        quantity_column("downtime_hours", "Downtime"),
    ]
}

#[component]
pub fn MaintenanceRegister() -> impl IntoView {
    view! { <RegisterPage title=MaintenanceEntry::list_name() path="/api/maintenance" columns=columns() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{model, ActionFlags, CellModel, TableBody};
    use crate::shared::number_format::format_quantity;
    use contracts::domain::common::NameRef;

    #[test]
    fn type_column_reads_the_renamed_field() {
        let entry = MaintenanceEntry {
            id: 1,
            maintenance_id: "MNT-001".into(),
            machine_id: 2,
            maintenance_type: "Preventive".into(),
            downtime_hours: 4.0,
            machines: Some(NameRef::new("VMC-01")),
            ..Default::default()
        };
        let table = model(&columns(), &[entry], ActionFlags::default(), false);
        let TableBody::Rows(rows) = table.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].cells[2], CellModel::Text("Preventive".into()));
        assert_eq!(rows[0].cells[5], CellModel::Formatted(serde_json::json!(4.0)));
        assert_eq!(format_quantity(4.0), "4");
        assert!(table.action_column.is_none());
    }
}
