use crate::domain::a006_challan::api;
use crate::domain::a005_job;
use crate::shared::browser::random_suffix;
use crate::shared::components::ui::{bind, parse_or_zero, Input, Select, Textarea};
use crate::shared::date_utils::{from_input_value, to_input_value, today};
use chrono::Datelike;
use contracts::domain::a005_job::aggregate::Job;
use contracts::domain::a006_challan::aggregate::{
    challan_number, format_params, parse_params, ChallanDto, ProcessType,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fresh challan form: generated number, sent today
pub fn new_challan_form(number: String, date_sent: chrono::NaiveDate) -> ChallanDto {
    ChallanDto {
        challan_no: number,
        date_sent: Some(date_sent),
        ..Default::default()
    }
}

/// Copies the job code and its customer into the form
pub fn apply_job(form: &mut ChallanDto, job: Option<&Job>) {
    match job {
        Some(job) => {
            form.job_id = job.job_id.clone();
            form.customer_id = Some(job.customer_id);
        }
        None => {
            form.job_id.clear();
            form.customer_id = None;
        }
    }
}

#[derive(Clone, Copy)]
pub struct ChallanDetailsViewModel {
    pub form: RwSignal<ChallanDto>,
    /// `key=value` lines, parsed into the process parameters on save
    pub params_text: RwSignal<String>,
    pub jobs: RwSignal<Vec<Job>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ChallanDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ChallanDto::default()),
            params_text: RwSignal::new(String::new()),
            jobs: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn load_jobs(&self) {
        let jobs = self.jobs;
        let error = self.error;
        spawn_local(async move {
            match a005_job::api::fetch_all().await {
                Ok(list) => jobs.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn open_new(&self) {
        let now = today();
        let number = challan_number(now.year(), random_suffix());
        let form = new_challan_form(number, now);
        self.params_text.set(format_params(&form.params_json));
        self.form.set(form);
        self.error.set(None);
    }

    pub fn select_job(&self, job_id: &str) {
        let job = self
            .jobs
            .with_untracked(|list| list.iter().find(|j| j.job_id == job_id).cloned());
        self.form.update(|f| apply_job(f, job.as_ref()));
    }

    pub fn customer_name(&self) -> String {
        let job_id = self.form.with(|f| f.job_id.clone());
        self.jobs.with(|list| {
            list.iter()
                .find(|j| j.job_id == job_id)
                .and_then(|j| j.customers.as_ref().map(|c| c.name.clone()))
                .unwrap_or_default()
        })
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        current.params_json = parse_params(&self.params_text.get_untracked());
        if current.job_id.is_empty() || current.customer_id.is_none() {
            self.error.set(Some("Select a job".into()));
            return;
        }
        if current.qty_sent <= 0 {
            self.error.set(Some("Quantity sent must be greater than zero".into()));
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
pub fn ChallanDetails(
    vm: ChallanDetailsViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (number, set_number) = bind(vm.form, |f| f.challan_no.clone(), |f, v| f.challan_no = v);
    let job = Signal::derive(move || vm.form.with(|f| f.job_id.clone()));
    let set_job = Callback::new(move |v: String| vm.select_job(&v));
    let (qty, set_qty) = bind(
        vm.form,
        |f| f.qty_sent.to_string(),
        |f, v| f.qty_sent = parse_or_zero(&v),
    );
    let process = Signal::derive(move || {
        vm.form.with(|f| f.process_type.display_name().to_string())
    });
    let set_process = Callback::new(move |v: String| {
        if let Some(p) = ProcessType::from_display_name(&v) {
            vm.form.update(|f| f.process_type = p);
        }
    });
    let (thickness, set_thickness) = bind(vm.form, |f| f.thickness.clone(), |f, v| f.thickness = v);
    let (sent, set_sent) = bind(
        vm.form,
        |f| to_input_value(f.date_sent),
        |f, v| f.date_sent = from_input_value(&v),
    );
    let (expected, set_expected) = bind(
        vm.form,
        |f| to_input_value(f.expected_return_date),
        |f, v| f.expected_return_date = from_input_value(&v),
    );
    let customer = Signal::derive(move || vm.customer_name());
    let params = Signal::derive(move || vm.params_text.get());
    let set_params = Callback::new(move |v: String| vm.params_text.set(v));

    let job_options = Signal::derive(move || {
        vm.jobs.with(|list| {
            list.iter()
                .map(|j| (j.job_id.clone(), format!("{} ({})", j.job_id, j.part_no)))
                .collect::<Vec<_>>()
        })
    });
    let process_options: Vec<(String, String)> = ProcessType::all()
        .iter()
        .map(|p| (p.display_name().to_string(), p.display_name().to_string()))
        .collect();

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
                <Input label="Challan No" value=number on_input=set_number readonly=true />
                <Select label="Job ID" value=job on_change=set_job options=job_options placeholder="Select Job" />
                <Input label="Customer" value=customer on_input=Callback::new(|_| {}) readonly=true />
                <Input label="Quantity Sent" input_type="number" value=qty on_input=set_qty />
                <Select label="Process Type" value=process on_change=set_process options=process_options />
                <Input label="Thickness" value=thickness on_input=set_thickness />
                <Input label="Date Sent" input_type="date" value=sent on_input=set_sent />
                <Input label="Expected Return" input_type="date" value=expected on_input=set_expected />
            </div>
            <Textarea
                label="Process Parameters"
                value=params
                on_input=set_params
                placeholder="one key=value per line, e.g. ph=4.5"
            />
            <div class="details-actions">
                <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="button button--primary" prop:disabled=move || vm.saving.get()>
                    "Create Challan"
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a005_job::aggregate::JobDto;

    #[test]
    fn new_form_is_sent_today_with_default_thickness() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
        let form = new_challan_form("CH-2025-001".into(), day);
        assert_eq!(form.date_sent, Some(day));
        assert_eq!(form.thickness, "10-15 microns");
        assert_eq!(form.process_type, ProcessType::ZincPlating);
    }

    #[test]
    fn picking_a_job_takes_its_customer() {
        let job = Job::new_for_insert(&JobDto {
            job_id: "CNC-2025-001".into(),
            customer_id: Some(7),
            part_no: "P1001".into(),
            qty_ordered: 10,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 1),
            ..Default::default()
        })
        .unwrap();
        let mut form = ChallanDto::default();
        apply_job(&mut form, Some(&job));
        assert_eq!(form.job_id, "CNC-2025-001");
        assert_eq!(form.customer_id, Some(7));

        apply_job(&mut form, None);
        assert!(form.job_id.is_empty());
        assert_eq!(form.customer_id, None);
    }
}
