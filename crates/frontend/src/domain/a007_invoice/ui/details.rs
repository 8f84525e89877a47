use crate::domain::a001_customer;
use crate::domain::a005_job;
use crate::domain::a007_invoice::api;
use crate::shared::browser::random_suffix;
use crate::shared::components::ui::{bind, Input, Select};
use crate::shared::date_utils::{from_input_value, to_input_value, today};
use chrono::Datelike;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::a007_invoice::aggregate::{invoice_number, InvoiceDto};
use contracts::shared::money::GstBreakdown;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub form: RwSignal<InvoiceDto>,
    /// Taxable amount as typed; the breakdown is derived from it
    pub taxable_text: RwSignal<String>,
    pub jobs: RwSignal<Vec<Job>>,
    pub customers: RwSignal<Vec<Customer>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InvoiceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(InvoiceDto::default()),
            taxable_text: RwSignal::new(String::new()),
            jobs: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn load_lookups(&self) {
        let (jobs, customers, error) = (self.jobs, self.customers, self.error);
        spawn_local(async move {
            match a005_job::api::fetch_all().await {
                Ok(list) => jobs.set(list),
                Err(e) => error.set(Some(e)),
            }
            match a001_customer::api::fetch_all().await {
                Ok(list) => customers.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn open_new(&self) {
        let now = today();
        self.form.set(InvoiceDto {
            invoice_no: invoice_number(now.year(), random_suffix()),
            invoice_date: Some(now),
            ..Default::default()
        });
        self.taxable_text.set(String::new());
        self.error.set(None);
    }

    pub fn amounts(&self) -> GstBreakdown {
        self.taxable_text.with(|t| GstBreakdown::from_input(t))
    }

    /// Picking a job preselects its customer
    pub fn select_job(&self, job_id: String) {
        let customer = self
            .jobs
            .with_untracked(|list| list.iter().find(|j| j.job_id == job_id).map(|j| j.customer_id));
        self.form.update(|f| {
            f.job_id = job_id;
            if customer.is_some() {
                f.customer_id = customer;
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        let amounts = self.amounts();
        current.taxable_amount = amounts.taxable_amount;
        if current.job_id.is_empty() {
            self.error.set(Some("Select a job".into()));
            return;
        }
        if current.customer_id.is_none() {
            self.error.set(Some("Select a customer".into()));
            return;
        }
        if current.taxable_amount <= 0.0 {
            self.error.set(Some("Taxable amount must be greater than zero".into()));
            return;
        }
        let (error, saving) = (self.error, self.saving);
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
pub fn InvoiceDetails(
    vm: InvoiceDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (number, set_number) = bind(vm.form, |f| f.invoice_no.clone(), |f, v| f.invoice_no = v);
    let (date, set_date) = bind(
        vm.form,
        |f| to_input_value(f.invoice_date),
        |f, v| f.invoice_date = from_input_value(&v),
    );
    let job = Signal::derive(move || vm.form.with(|f| f.job_id.clone()));
    let set_job = Callback::new(move |v: String| vm.select_job(v));
    let (customer, set_customer) = bind(
        vm.form,
        |f| f.customer_id.map(|id| id.to_string()).unwrap_or_default(),
        |f, v| f.customer_id = v.parse().ok(),
    );
    let taxable = Signal::derive(move || vm.taxable_text.get());
    let set_taxable = Callback::new(move |v: String| vm.taxable_text.set(v));
    let gst = Signal::derive(move || format!("{:.2}", vm.amounts().gst_amount));
    let total = Signal::derive(move || format!("{:.2}", vm.amounts().total_amount));

    let job_options = Signal::derive(move || {
        vm.jobs.with(|list| {
            list.iter()
                .map(|j| (j.job_id.clone(), j.job_id.clone()))
                .collect::<Vec<_>>()
        })
    });
    let customer_options = Signal::derive(move || {
        vm.customers.with(|list| {
            list.iter()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let noop = Callback::new(|_: String| {});

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
                <Input label="Invoice No" value=number on_input=set_number readonly=true />
                <Input label="Invoice Date" input_type="date" value=date on_input=set_date required=true />
                <Select label="Job ID" value=job on_change=set_job options=job_options placeholder="Select Job" />
                <Select
                    label="Customer"
                    value=customer
                    on_change=set_customer
                    options=customer_options
                    placeholder="Select Customer"
                />
                <Input label="Taxable Amount" input_type="number" step="0.01" value=taxable on_input=set_taxable required=true />
                <Input label="GST (18%)" value=gst on_input=noop readonly=true />
                <Input label="Total Amount" value=total on_input=noop readonly=true />
            </div>
            <div class="details-actions">
                <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="button button--primary" prop:disabled=move || vm.saving.get()>
                    "Create Invoice"
                </button>
            </div>
        </form>
    }
}
