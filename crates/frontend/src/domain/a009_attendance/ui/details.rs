use crate::domain::a002_employee;
use crate::domain::a009_attendance::api;
use crate::shared::browser::alert;
use crate::shared::components::ui::{bind, Input, Select, Textarea};
use crate::shared::date_utils::{from_input_value, to_input_value};
use chrono::NaiveDate;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a009_attendance::aggregate::{AttendanceRecordDto, AttendanceStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Form state after editing OT hours as text; blank counts as zero
pub fn with_ot_hours(mut dto: AttendanceRecordDto, raw: &str) -> Result<AttendanceRecordDto, String> {
    dto.ot_hours = match raw.trim() {
        "" => 0.0,
        text => text
            .parse::<f64>()
            .map_err(|_| format!("OT hours '{}' is not a number", text))?,
    };
    dto.validate()?;
    Ok(dto)
}

#[derive(Clone, Copy)]
pub struct AttendanceDetailsViewModel {
    pub form: RwSignal<AttendanceRecordDto>,
    pub ot_text: RwSignal<String>,
    /// Active employees only
    pub employees: RwSignal<Vec<Employee>>,
    pub saving: RwSignal<bool>,
}

impl AttendanceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AttendanceRecordDto::default()),
            ot_text: RwSignal::new("0".into()),
            employees: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
        }
    }

    pub fn load_employees(&self) {
        let employees = self.employees;
        spawn_local(async move {
            match a002_employee::api::fetch_all().await {
                Ok(mut list) => {
                    list.retain(|e| e.is_active());
                    list.sort_by(|a, b| a.name.cmp(&b.name));
                    employees.set(list);
                }
                Err(e) => log::error!("failed to load employees: {}", e),
            }
        });
    }

    pub fn open(&self, dto: AttendanceRecordDto) {
        self.ot_text.set(dto.ot_hours.to_string());
        self.form.set(dto);
    }

    pub fn open_new(&self, date: NaiveDate) {
        self.open(AttendanceRecordDto::for_date(date));
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match with_ot_hours(self.form.get_untracked(), &self.ot_text.get_untracked()) {
            Ok(dto) => dto,
            Err(message) => {
                alert(&message);
                return;
            }
        };
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => alert(&format!("Error saving attendance: {}", e)),
            }
            saving.set(false);
        });
    }
}

#[component]
pub fn AttendanceDetails(
    vm: AttendanceDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (employee, set_employee) = bind(
        vm.form,
        |f| f.employee_id.map(|id| id.to_string()).unwrap_or_default(),
        |f, v| f.employee_id = v.parse().ok(),
    );
    let (date, set_date) = bind(
        vm.form,
        |f| to_input_value(f.date),
        |f, v| f.date = from_input_value(&v),
    );
    let (status, set_status) = bind(
        vm.form,
        |f| f.status.as_str().to_string(),
        |f, v| {
            if let Some(s) = AttendanceStatus::from_str(&v) {
                f.status = s;
            }
        },
    );
    let (notes, set_notes) = bind(vm.form, |f| f.notes.clone(), |f, v| f.notes = v);
    let ot = Signal::derive(move || vm.ot_text.get());
    let set_ot = Callback::new(move |v: String| vm.ot_text.set(v));

    let employee_options = Signal::derive(move || {
        vm.employees.with(|list| {
            list.iter()
                .map(|e| (e.id.to_string(), format!("{} - {}", e.employee_code, e.name)))
                .collect::<Vec<_>>()
        })
    });
    let status_options: Vec<(String, String)> = AttendanceStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let locked = Signal::derive(move || vm.is_edit_mode());

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(on_saved);
            }
        >
            <div class="form__grid">
                <Select
                    label="Employee"
                    value=employee
                    on_change=set_employee
                    options=employee_options
                    placeholder="Select Employee"
                    disabled=locked
                />
                <Input label="Date" input_type="date" value=date on_input=set_date disabled=locked />
                <Select label="Status" value=status on_change=set_status options=status_options />
                <Input label="OT Hours" input_type="number" step="0.5" value=ot on_input=set_ot />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes rows=3 />
            <div class="details-actions">
                <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="button button--primary" prop:disabled=move || vm.saving.get()>
                    "Save"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a009_attendance::aggregate::MISSING_EMPLOYEE_OR_DATE;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 27).unwrap()
    }

    #[test]
    fn new_mark_defaults_to_present_without_overtime() {
        let dto = AttendanceRecordDto {
            employee_id: Some(3),
            ..AttendanceRecordDto::for_date(day())
        };
        let dto = with_ot_hours(dto, "").unwrap();
        assert_eq!(dto.status, AttendanceStatus::Present);
        assert_eq!(dto.ot_hours, 0.0);
    }

    #[test]
    fn employee_is_required() {
        let err = with_ot_hours(AttendanceRecordDto::for_date(day()), "0").unwrap_err();
        assert_eq!(err, MISSING_EMPLOYEE_OR_DATE);
    }

    #[test]
    fn ot_hours_must_be_numeric() {
        let dto = AttendanceRecordDto {
            employee_id: Some(3),
            ..AttendanceRecordDto::for_date(day())
        };
        assert_eq!(with_ot_hours(dto.clone(), "2.5").unwrap().ot_hours, 2.5);
        assert!(with_ot_hours(dto, "two").is_err());
    }
}
