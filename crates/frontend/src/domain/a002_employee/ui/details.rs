use crate::domain::a002_employee::api;
use crate::shared::components::ui::select::same_options;
use crate::shared::components::ui::{bind, Input, Select};
use contracts::domain::a002_employee::aggregate::{
    EmployeeDto, ROLES, SHIFTS, SKILL_LEVELS, STATUS_ACTIVE, STATUS_INACTIVE,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmployeeDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn open(&self, dto: EmployeeDto) {
        self.form.set(dto);
        self.error.set(None);
    }

    pub fn title(&self) -> String {
        if self.form.with(|f| f.id.is_some()) {
            "Edit Employee".into()
        } else {
            "Add Employee".into()
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() {
            self.error.set(Some("Employee name is required".into()));
            return;
        }
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(_) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}

#[component]
pub fn EmployeeDetails(
    vm: EmployeeDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (code, set_code) = bind(
        vm.form,
        |f| f.employee_code.clone(),
        |f, v| f.employee_code = v,
    );
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (role, set_role) = bind(vm.form, |f| f.role.clone(), |f, v| f.role = v);
    let (department, set_department) =
        bind(vm.form, |f| f.department.clone(), |f, v| f.department = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (shift, set_shift) = bind(vm.form, |f| f.shift.clone(), |f, v| f.shift = v);
    let (skill, set_skill) = bind(vm.form, |f| f.skill_level.clone(), |f, v| f.skill_level = v);
    let (status, set_status) = bind(vm.form, |f| f.status.clone(), |f, v| f.status = v);

    let shift_options: Vec<(String, String)> = SHIFTS
        .iter()
        .map(|s| (s.to_string(), format!("Shift {}", s)))
        .collect();
    let status_options = vec![
        (STATUS_ACTIVE.to_string(), "Active".to_string()),
        (STATUS_INACTIVE.to_string(), "Inactive".to_string()),
    ];

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_command(on_saved);
            }
        >
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            <div class="form__grid">
                <Input label="Employee Code" value=code on_input=set_code placeholder="EMP-001" />
                <Input label="Name" value=name on_input=set_name required=true />
                <Select label="Role" value=role on_change=set_role options=same_options(ROLES) />
                <Input label="Department" value=department on_input=set_department />
                <Input label="Phone" value=phone on_input=set_phone />
                <Select label="Shift" value=shift on_change=set_shift options=shift_options />
                <Select
                    label="Skill Level"
                    value=skill
                    on_change=set_skill
                    options=same_options(SKILL_LEVELS)
                />
                <Select label="Status" value=status on_change=set_status options=status_options />
            </div>
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
