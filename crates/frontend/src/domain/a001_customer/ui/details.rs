use crate::domain::a001_customer::api;
use crate::shared::components::ui::{bind, parse_or_zero, Input, Textarea};
use contracts::domain::a001_customer::aggregate::CustomerDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Create/edit form state for a customer
#[derive(Clone, Copy)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn open_new(&self) {
        self.form.set(CustomerDto::default());
        self.error.set(None);
    }

    pub fn open_edit(&self, dto: CustomerDto) {
        self.form.set(dto);
        self.error.set(None);
    }

    pub fn title(&self) -> String {
        if self.form.with(|f| f.id.is_some()) {
            "Edit Customer".into()
        } else {
            "Add Customer".into()
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() {
            self.error.set(Some("Customer name is required".into()));
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
pub fn CustomerDetails(
    vm: CustomerDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (gstin, set_gstin) = bind(vm.form, |f| f.gstin.clone(), |f, v| f.gstin = v);
    let (contact, set_contact) = bind(
        vm.form,
        |f| f.contact_person.clone(),
        |f, v| f.contact_person = v,
    );
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (billing, set_billing) = bind(
        vm.form,
        |f| f.billing_address.clone(),
        |f, v| f.billing_address = v,
    );
    let (shipping, set_shipping) = bind(
        vm.form,
        |f| f.shipping_address.clone(),
        |f, v| f.shipping_address = v,
    );
    let (credit, set_credit) = bind(
        vm.form,
        |f| f.credit_days.to_string(),
        |f, v| f.credit_days = parse_or_zero(&v),
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
                <Input label="Customer Name" value=name on_input=set_name required=true />
                <Input label="GSTIN" value=gstin on_input=set_gstin placeholder="27AAPFU0939F1ZV" />
                <Input label="Contact Person" value=contact on_input=set_contact />
                <Input label="Phone" value=phone on_input=set_phone />
                <Input label="Credit Days" input_type="number" value=credit on_input=set_credit />
            </div>
            <Textarea label="Billing Address" value=billing on_input=set_billing />
            <Textarea label="Shipping Address" value=shipping on_input=set_shipping />
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
