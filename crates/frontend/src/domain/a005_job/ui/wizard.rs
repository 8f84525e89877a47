//! Three-step job creation: header, routing, review.

use crate::domain::a005_job::api;
use crate::domain::{a001_customer, a002_employee, a003_part, a004_machine};
use crate::shared::browser::random_suffix;
use crate::shared::components::ui::{bind, parse_or_zero, Input, Select};
use crate::shared::date_utils::{format_opt_date, from_input_value, to_input_value, today};
use chrono::Datelike;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_employee::aggregate::Employee;
use contracts::domain::a003_part::aggregate::Part;
use contracts::domain::a004_machine::aggregate::Machine;
use contracts::domain::a005_job::aggregate::{
    job_number, next_op_seq, renumber_route, JobDto, JobType, RouteOp,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Header,
    Routing,
    Review,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Header => 1,
            WizardStep::Routing => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            WizardStep::Header => WizardStep::Routing,
            WizardStep::Routing | WizardStep::Review => WizardStep::Review,
        }
    }

    /// `None` on the first step, where the back button cancels
    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Header => None,
            WizardStep::Routing => Some(WizardStep::Header),
            WizardStep::Review => Some(WizardStep::Routing),
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            WizardStep::Header => "Step 1: Job Details",
            WizardStep::Routing => "Step 2: Routing",
            WizardStep::Review => "Step 3: Review",
        }
    }
}

/// What must be filled in before leaving a step
pub fn validate_step(step: WizardStep, form: &JobDto) -> Result<(), String> {
    match step {
        WizardStep::Header => {
            if form.customer_id.is_none() {
                return Err("Select a customer".into());
            }
            if form.part_no.trim().is_empty() {
                return Err("Select a part".into());
            }
            if form.qty_ordered <= 0 {
                return Err("Quantity must be greater than zero".into());
            }
            if form.due_date.is_none() {
                return Err("Due date is required".into());
            }
            Ok(())
        }
        WizardStep::Routing => {
            if form.route.iter().any(|op| op.op_name.trim().is_empty()) {
                return Err("Every operation needs a name".into());
            }
            Ok(())
        }
        WizardStep::Review => Ok(()),
    }
}

/// Blank form with a freshly numbered job of the given type
pub fn new_job_form(job_type: JobType, year: i32, suffix: u32) -> JobDto {
    JobDto {
        job_id: job_number(job_type, year, suffix),
        job_type,
        ..Default::default()
    }
}

#[derive(Clone, Copy)]
pub struct JobWizardViewModel {
    pub form: RwSignal<JobDto>,
    pub step: RwSignal<WizardStep>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub customers: RwSignal<Vec<Customer>>,
    pub parts: RwSignal<Vec<Part>>,
    pub machines: RwSignal<Vec<Machine>>,
    pub operators: RwSignal<Vec<Employee>>,
}

impl JobWizardViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(JobDto::default()),
            step: RwSignal::new(WizardStep::Header),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            customers: RwSignal::new(Vec::new()),
            parts: RwSignal::new(Vec::new()),
            machines: RwSignal::new(Vec::new()),
            operators: RwSignal::new(Vec::new()),
        }
    }

    /// Pick lists for the header and routing steps
    pub fn load_lookups(&self) {
        let (customers, parts, machines, operators, error) = (
            self.customers,
            self.parts,
            self.machines,
            self.operators,
            self.error,
        );
        spawn_local(async move {
            match a001_customer::api::fetch_all().await {
                Ok(v) => customers.set(v),
                Err(e) => error.set(Some(e)),
            }
            match a003_part::api::fetch_all().await {
                Ok(v) => parts.set(v),
                Err(e) => error.set(Some(e)),
            }
            match a004_machine::api::fetch_all().await {
                Ok(v) => machines.set(v),
                Err(e) => error.set(Some(e)),
            }
            match a002_employee::api::fetch_all().await {
                Ok(v) => operators.set(v.into_iter().filter(|e| e.is_active()).collect()),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    pub fn open_new(&self) {
        self.form
            .set(new_job_form(JobType::Cnc, today().year(), random_suffix()));
        self.step.set(WizardStep::Header);
        self.error.set(None);
    }

    pub fn set_job_type(&self, job_type: JobType) {
        self.form.update(|f| {
            f.job_type = job_type;
            f.job_id = job_number(job_type, today().year(), random_suffix());
        });
    }

    pub fn add_operation(&self) {
        self.form.update(|f| {
            let seq = next_op_seq(&f.route);
            f.route.push(RouteOp::blank(seq));
        });
    }

    pub fn remove_operation(&self, index: usize) {
        self.form.update(|f| {
            if f.route.len() > 1 && index < f.route.len() {
                f.route.remove(index);
                renumber_route(&mut f.route);
            }
        });
    }

    pub fn update_operation(&self, index: usize, apply: impl FnOnce(&mut RouteOp)) {
        self.form.update(|f| {
            if let Some(op) = f.route.get_mut(index) {
                apply(op);
            }
        });
    }

    pub fn back(&self, on_cancel: Callback<()>) {
        self.error.set(None);
        match self.step.get_untracked().previous() {
            Some(prev) => self.step.set(prev),
            None => on_cancel.run(()),
        }
    }

    /// Advances a step, or creates the job from the review step
    pub fn submit(&self, on_saved: Callback<()>) {
        let step = self.step.get_untracked();
        let current = self.form.get_untracked();
        if let Err(msg) = validate_step(step, &current) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        if step != WizardStep::Review {
            self.step.set(step.next());
            return;
        }
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("job {} created with id {}", current.job_id, saved.id);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }

    fn customer_name(&self, id: Option<i64>) -> String {
        self.customers.with(|list| {
            list.iter()
                .find(|c| Some(c.id) == id)
                .map(|c| c.name.clone())
                .unwrap_or_default()
        })
    }
}

#[component]
fn StepIndicator(step: RwSignal<WizardStep>) -> impl IntoView {
    view! {
        <div class="wizard-steps">
            {[WizardStep::Header, WizardStep::Routing, WizardStep::Review]
                .into_iter()
                .map(|s| {
                    let class = move || {
                        if step.get().number() >= s.number() {
                            "wizard-steps__dot wizard-steps__dot--active"
                        } else {
                            "wizard-steps__dot"
                        }
                    };
                    view! { <div class=class>{s.number()}</div> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn HeaderStep(vm: JobWizardViewModel) -> impl IntoView {
    let (job_id, set_job_id) = bind(vm.form, |f| f.job_id.clone(), |f, v| f.job_id = v);
    let (customer, set_customer) = bind(
        vm.form,
        |f| f.customer_id.map(|id| id.to_string()).unwrap_or_default(),
        |f, v| f.customer_id = v.parse().ok(),
    );
    let (part, set_part) = bind(vm.form, |f| f.part_no.clone(), |f, v| f.part_no = v);
    let (rev, set_rev) = bind(vm.form, |f| f.rev.clone(), |f, v| f.rev = v);
    let (qty, set_qty) = bind(
        vm.form,
        |f| f.qty_ordered.to_string(),
        |f, v| f.qty_ordered = parse_or_zero(&v),
    );
    let (due, set_due) = bind(
        vm.form,
        |f| to_input_value(f.due_date),
        |f, v| f.due_date = from_input_value(&v),
    );
    let job_type = Signal::derive(move || vm.form.with(|f| f.job_type.as_str().to_string()));
    let set_job_type = Callback::new(move |v: String| {
        if let Some(t) = JobType::from_str(&v) {
            vm.set_job_type(t);
        }
    });

    let customer_options = Signal::derive(move || {
        vm.customers.with(|list| {
            list.iter()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let part_options = Signal::derive(move || {
        vm.parts.with(|list| {
            list.iter()
                .map(|p| (p.part_no.clone(), format!("{} - {}", p.part_no, p.description)))
                .collect::<Vec<_>>()
        })
    });
    let type_options: Vec<(String, String)> = JobType::all()
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect();

    view! {
        <div class="form__grid">
            <Input label="Job ID" value=job_id on_input=set_job_id readonly=true />
            <Select
                label="Customer"
                value=customer
                on_change=set_customer
                options=customer_options
                placeholder="Select Customer"
            />
            <Select
                label="Part Number"
                value=part
                on_change=set_part
                options=part_options
                placeholder="Select Part"
            />
            <Input label="Revision" value=rev on_input=set_rev />
            <Input label="Quantity Ordered" input_type="number" value=qty on_input=set_qty />
            <Input label="Due Date" input_type="date" value=due on_input=set_due />
            <Select label="Job Type" value=job_type on_change=set_job_type options=type_options />
        </div>
    }
}

#[component]
fn RoutingStep(vm: JobWizardViewModel) -> impl IntoView {
    let machine_options = move || {
        vm.machines.with(|list| {
            list.iter()
                .map(|m| (m.id.to_string(), format!("{} ({})", m.name, m.machine_type)))
                .collect::<Vec<_>>()
        })
    };
    let operator_options = move || {
        vm.operators.with(|list| {
            list.iter()
                .map(|e| (e.id.to_string(), e.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="wizard-routing">
            <div class="wizard-routing__toolbar">
                <button type="button" class="button button--ghost" on:click=move |_| vm.add_operation()>
                    "+ Add Operation"
                </button>
            </div>
            {move || {
                let route = vm.form.with(|f| f.route.clone());
                let removable = route.len() > 1;
                route
                    .into_iter()
                    .enumerate()
                    .map(|(index, op)| {
                        let machine_value = op.machine_id.clone();
                        let operator_value = op.operator_id.clone();
                        view! {
                            <div class="route-op">
                                <span class="route-op__seq">{format!("OP{}", op.op_seq)}</span>
                                <input
                                    class="form__input"
                                    placeholder="Operation name"
                                    prop:value=op.op_name.clone()
                                    on:change=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.update_operation(index, |o| o.op_name = v);
                                    }
                                />
                                <select
                                    class="form__select"
                                    on:change=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.update_operation(index, |o| o.machine_id = v);
                                    }
                                >
                                    <option value="">"Machine"</option>
                                    {machine_options()
                                        .into_iter()
                                        .map(|(value, caption)| {
                                            let selected = value == machine_value;
                                            view! { <option value=value selected=selected>{caption}</option> }
                                        })
                                        .collect_view()}
                                </select>
                                <select
                                    class="form__select"
                                    on:change=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.update_operation(index, |o| o.operator_id = v);
                                    }
                                >
                                    <option value="">"Operator"</option>
                                    {operator_options()
                                        .into_iter()
                                        .map(|(value, caption)| {
                                            let selected = value == operator_value;
                                            view! { <option value=value selected=selected>{caption}</option> }
                                        })
                                        .collect_view()}
                                </select>
                                <Show when=move || removable>
                                    <button
                                        type="button"
                                        class="table__action table__action--danger"
                                        title="Remove"
                                        on:click=move |_| vm.remove_operation(index)
                                    >
                                        {crate::shared::icons::icon("trash")}
                                    </button>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ReviewStep(vm: JobWizardViewModel) -> impl IntoView {
    move || {
        let f = vm.form.get();
        let customer = vm.customer_name(f.customer_id);
        view! {
            <dl class="review-list">
                <dt>"Job ID"</dt><dd>{f.job_id.clone()}</dd>
                <dt>"Customer"</dt><dd>{customer}</dd>
                <dt>"Part"</dt><dd>{format!("{} rev {}", f.part_no, f.rev)}</dd>
                <dt>"Quantity"</dt><dd>{f.qty_ordered}</dd>
                <dt>"Due Date"</dt><dd>{format_opt_date(f.due_date)}</dd>
                <dt>"Job Type"</dt><dd>{f.job_type.as_str()}</dd>
                <dt>"Operations"</dt><dd>{f.route.len()}</dd>
            </dl>
        }
    }
}

#[component]
pub fn JobWizard(
    vm: JobWizardViewModel,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit(on_saved);
            }
        >
            <StepIndicator step=vm.step />
            <h4 class="wizard__caption">{move || vm.step.get().caption()}</h4>
            {move || vm.error.get().map(|e| view! { <div class="warning-box">{e}</div> })}
            {move || match vm.step.get() {
                WizardStep::Header => view! { <HeaderStep vm=vm /> }.into_any(),
                WizardStep::Routing => view! { <RoutingStep vm=vm /> }.into_any(),
                WizardStep::Review => view! { <ReviewStep vm=vm /> }.into_any(),
            }}
            <div class="details-actions">
                <button type="button" class="button button--secondary" on:click=move |_| vm.back(on_cancel)>
                    {move || if vm.step.get() == WizardStep::Header { "Cancel" } else { "Back" }}
                </button>
                <button type="submit" class="button button--primary" prop:disabled=move || vm.saving.get()>
                    {move || if vm.step.get() == WizardStep::Review { "Create Job" } else { "Next" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_header() -> JobDto {
        JobDto {
            customer_id: Some(1),
            part_no: "P1001".into(),
            qty_ordered: 100,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 15),
            ..new_job_form(JobType::Cnc, 2025, 1)
        }
    }

    #[test]
    fn steps_move_forward_and_back() {
        assert_eq!(WizardStep::Header.next(), WizardStep::Routing);
        assert_eq!(WizardStep::Routing.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Routing));
        assert_eq!(WizardStep::Header.previous(), None);
    }

    #[test]
    fn new_form_is_numbered_by_type() {
        let cnc = new_job_form(JobType::Cnc, 2025, 42);
        assert_eq!(cnc.job_id, "CNC-2025-042");
        assert_eq!(cnc.route.len(), 1);
        assert_eq!(cnc.route[0].op_seq, 10);
        assert_eq!(new_job_form(JobType::Plating, 2025, 7).job_id, "PLT-2025-007");
    }

    #[test]
    fn header_needs_customer_part_qty_and_due_date() {
        assert!(validate_step(WizardStep::Header, &filled_header()).is_ok());

        let mut missing = filled_header();
        missing.customer_id = None;
        assert!(validate_step(WizardStep::Header, &missing).is_err());

        let mut zero_qty = filled_header();
        zero_qty.qty_ordered = 0;
        assert!(validate_step(WizardStep::Header, &zero_qty).is_err());
    }

    #[test]
    fn routing_needs_named_operations() {
        let mut form = filled_header();
        assert!(validate_step(WizardStep::Routing, &form).is_err());
        form.route[0].op_name = "Turning".into();
        assert!(validate_step(WizardStep::Routing, &form).is_ok());
    }
}
