use crate::domain::a004_machine::api;
use crate::shared::components::ui::{bind, Input};
use crate::shared::date_utils::{from_input_value, to_input_value};
use contracts::domain::a004_machine::aggregate::MachineDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MachineDetailsViewModel {
    pub form: RwSignal<MachineDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl MachineDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(MachineDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn open(&self, dto: MachineDto) {
        self.form.set(dto);
        self.error.set(None);
    }

    pub fn title(&self) -> String {
        if self.form.with(|f| f.id.is_some()) {
            "Edit Machine".into()
        } else {
            "Add Machine".into()
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() || current.machine_type.trim().is_empty() {
            self.error.set(Some("Machine name and type are required".into()));
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
pub fn MachineDetails(
    vm: MachineDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (kind, set_kind) = bind(vm.form, |f| f.machine_type.clone(), |f, v| f.machine_type = v);
    let (model, set_model) = bind(vm.form, |f| f.model.clone(), |f, v| f.model = v);
    let (location, set_location) = bind(vm.form, |f| f.location.clone(), |f, v| f.location = v);
    let (last_pm, set_last_pm) = bind(
        vm.form,
        |f| to_input_value(f.last_pm_date),
        |f, v| f.last_pm_date = from_input_value(&v),
    );

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
                <Input label="Machine Name" value=name on_input=set_name required=true />
                <Input label="Type" value=kind on_input=set_kind placeholder="VMC, CNC Lathe, Plating Tank" />
                <Input label="Model" value=model on_input=set_model />
                <Input label="Location" value=location on_input=set_location />
                <Input label="Last PM Date" input_type="date" value=last_pm on_input=set_last_pm />
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
