//! Operator board: pending and in-progress jobs with start/pause/complete.

use crate::domain::a005_job::api;
use crate::shared::browser::{alert, prompt};
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a005_job::aggregate::{Job, JobStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Quantity typed into the completion prompt; `None` for blank or non-numeric input
pub fn parse_completed_qty(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|q| *q >= 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloorAction {
    Start,
    Pause,
    Complete(i32),
}

#[component]
fn JobCard(job: Job, on_action: Callback<(i64, FloorAction)>) -> impl IntoView {
    let id = job.id;
    let percent = job.progress_percent();
    let is_pending = job.status == JobStatus::Pending;
    let qty_ordered = job.qty_ordered;
    let customer = job.customers.as_ref().map(|c| c.name.clone()).unwrap_or_default();

    let complete = move |_| {
        let Some(raw) = prompt("Enter quantity completed:", &qty_ordered.to_string()) else {
            return;
        };
        match parse_completed_qty(&raw) {
            Some(qty) => on_action.run((id, FloorAction::Complete(qty))),
            None => alert("Enter a whole number"),
        }
    };

    view! {
        <div class="floor-card">
            <div class="floor-card__body">
                <div class="floor-card__title">
                    <h3>{job.job_id.clone()}</h3>
                    <Badge variant=job.status.badge_variant()>{job.status.label()}</Badge>
                </div>
                <p>"Customer: " <strong>{customer}</strong></p>
                <p>"Part: " <strong>{format!("{} (Rev {})", job.part_no, job.rev)}</strong></p>
                <p>"Due: " <strong>{format_date(&job.due_date.to_string())}</strong></p>
                <p>
                    "Progress: "
                    <strong>{format!("{} / {}", job.qty_completed, job.qty_ordered)}</strong>
                </p>
                {job.current_operation.clone().map(|op| view! {
                    <p>"Current Operation: " <strong>{op}</strong></p>
                })}
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {:.0}%", percent)></div>
                </div>
            </div>
            <div class="floor-card__actions">
                {if is_pending {
                    view! {
                        <button
                            class="button button--success"
                            on:click=move |_| on_action.run((id, FloorAction::Start))
                        >
                            {icon("play")}
                            " Start"
                        </button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button
                            class="button button--warning"
                            on:click=move |_| on_action.run((id, FloorAction::Pause))
                        >
                            {icon("pause")}
                            " Pause"
                        </button>
                        <button class="button button--primary" on:click=complete>
                            {icon("check-circle")}
                            " Complete"
                        </button>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn ShopFloorBoard() -> impl IntoView {
    let jobs = RwSignal::new(Vec::<Job>::new());
    let error = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            match api::fetch_shop_floor().await {
                Ok(data) => {
                    jobs.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    load();

    let on_action = Callback::new(move |(id, action): (i64, FloorAction)| {
        spawn_local(async move {
            let result = match action {
                FloorAction::Start => api::start(id).await,
                FloorAction::Pause => api::pause(id).await,
                FloorAction::Complete(qty) => api::complete(id, qty).await,
            };
            match result {
                Ok(job) => {
                    log::debug!("job {} is now {}", job.job_id, job.status.as_str());
                    load();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let count_of = move |status: JobStatus| {
        Signal::derive(move || {
            jobs.with(|list| list.iter().filter(|j| j.status == status).count().to_string())
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Shop Floor" subtitle="Live status of jobs on the floor">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <div class="floor-board">
                {move || {
                    let list = jobs.get();
                    if list.is_empty() {
                        view! { <div class="floor-board__empty">"No active jobs"</div> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|job| view! { <JobCard job=job on_action=on_action /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div class="stat-grid">
                <StatCard label="Active Jobs" icon_name="play" value=count_of(JobStatus::InProgress) />
                <StatCard
                    label="Pending Jobs"
                    icon_name="pause"
                    value=count_of(JobStatus::Pending)
                    tone="warning"
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_prompt_accepts_whole_numbers_only() {
        assert_eq!(parse_completed_qty(" 80 "), Some(80));
        assert_eq!(parse_completed_qty("0"), Some(0));
        assert_eq!(parse_completed_qty("-3"), None);
        assert_eq!(parse_completed_qty("many"), None);
        assert_eq!(parse_completed_qty(""), None);
    }
}
