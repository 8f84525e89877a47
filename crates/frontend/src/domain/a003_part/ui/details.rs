use crate::domain::a003_part::api;
use crate::shared::components::ui::{bind, Input, Textarea};
use contracts::domain::a003_part::aggregate::PartDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct PartDetailsViewModel {
    pub form: RwSignal<PartDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PartDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PartDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn open(&self, dto: PartDto) {
        self.form.set(dto);
        self.error.set(None);
    }

    /// The business code cannot change once the part exists
    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.part_no.trim().is_empty() {
            self.error.set(Some("Part number is required".into()));
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
pub fn PartDetails(
    vm: PartDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (part_no, set_part_no) = bind(vm.form, |f| f.part_no.clone(), |f, v| f.part_no = v);
    let (rev, set_rev) = bind(vm.form, |f| f.rev.clone(), |f, v| f.rev = v);
    let (material, set_material) = bind(vm.form, |f| f.material.clone(), |f, v| f.material = v);
    let (client_no, set_client_no) = bind(
        vm.form,
        |f| f.client_part_no.clone(),
        |f, v| f.client_part_no = v,
    );
    let (drawing, set_drawing) = bind(vm.form, |f| f.drawing_url.clone(), |f, v| f.drawing_url = v);
    let (description, set_description) =
        bind(vm.form, |f| f.description.clone(), |f, v| f.description = v);

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
                <Input
                    label="Part No"
                    value=part_no
                    on_input=set_part_no
                    disabled=Signal::derive(move || vm.is_edit_mode())
                    required=true
                />
                <Input label="Revision" value=rev on_input=set_rev />
                <Input label="Material" value=material on_input=set_material placeholder="EN8, SS304" />
                <Input label="Client Part No" value=client_no on_input=set_client_no />
                <Input label="Drawing URL" value=drawing on_input=set_drawing />
            </div>
            <Textarea label="Description" value=description on_input=set_description />
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
