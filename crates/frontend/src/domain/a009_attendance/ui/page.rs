use super::daily::DailyAttendance;
use super::details::{AttendanceDetails, AttendanceDetailsViewModel};
use super::monthly::MonthlySummary;
use crate::domain::a009_attendance::api;
use crate::shared::browser::{alert, confirm};
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::{Input, Select};
use crate::shared::date_utils::{current_month, from_input_value, month_name, to_input_value, today};
use crate::shared::form_dialog::FormDialog;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a009_attendance::aggregate::{
    AttendanceRecord, AttendanceStatus, BulkMarkRequest,
};
use contracts::domain::a009_attendance::summary::{AttendanceSummary, MonthRef};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttendanceTab {
    Daily,
    Monthly,
}

pub fn bulk_confirm_text(status: AttendanceStatus, date: NaiveDate) -> String {
    format!("Mark all employees as {} for {}?", status.as_str(), date)
}

/// Previous, current and next year, plus `selected` if it falls outside
pub fn year_options(current: i32, selected: i32) -> Vec<i32> {
    let mut years: Vec<i32> = (current - 1..=current + 1).collect();
    if !years.contains(&selected) {
        years.push(selected);
        years.sort_unstable();
    }
    years
}

#[component]
pub fn AttendanceManagementPage() -> impl IntoView {
    let tab = RwSignal::new(AttendanceTab::Daily);
    let date = RwSignal::new(today());
    let (month, year) = current_month();
    let period = RwSignal::new(MonthRef { month, year });
    let search = RwSignal::new(String::new());
    let records = RwSignal::new(Vec::<AttendanceRecord>::new());
    let summaries = RwSignal::new(Vec::<AttendanceSummary>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let show_modal = RwSignal::new(false);
    let vm = AttendanceDetailsViewModel::new();
    vm.load_employees();

    let load_records = move || {
        let day = date.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_records(day).await {
                Ok(data) => {
                    records.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    let load_summaries = move || {
        let selected = period.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_summaries(selected).await {
                Ok(data) => {
                    summaries.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        date.track();
        load_records();
    });
    Effect::new(move |_| {
        period.track();
        if tab.get() == AttendanceTab::Monthly {
            load_summaries();
        }
    });

    let filtered_records = Signal::derive(move || {
        let term = search.get();
        records.with(|list| {
            list.iter()
                .filter(|r| r.matches_search(&term))
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let filtered_summaries = Signal::derive(move || {
        let term = search.get();
        summaries.with(|list| {
            list.iter()
                .filter(|s| s.matches_search(&term))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let on_edit = Callback::new(move |record: AttendanceRecord| {
        vm.open(record.to_dto());
        show_modal.set(true);
    });
    let on_delete = Callback::new(move |record: AttendanceRecord| {
        if !confirm(&format!(
            "Delete attendance of {} for {}?",
            record.employee_name(),
            record.date
        )) {
            return;
        }
        spawn_local(async move {
            match api::remove(record.id).await {
                Ok(()) => load_records(),
                Err(e) => error.set(Some(e)),
            }
        });
    });
    let on_saved = Callback::new(move |_| {
        show_modal.set(false);
        load_records();
    });
    let on_close = Callback::new(move |_| show_modal.set(false));

    let bulk_mark = move |status: AttendanceStatus| {
        let day = date.get_untracked();
        if !confirm(&bulk_confirm_text(status, day)) {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::bulk_mark(&BulkMarkRequest { date: day, status }).await {
                Ok(result) => {
                    log::info!("marked {} employees as {}", result.marked, status.as_str());
                    load_records();
                }
                Err(e) => {
                    alert(&format!("Error marking attendance: {}", e));
                    loading.set(false);
                }
            }
        });
    };

    let recalculate = move |_| {
        let selected = period.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::recalculate(selected).await {
                Ok(data) => summaries.set(data),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    let date_value = Signal::derive(move || to_input_value(Some(date.get())));
    let set_date = Callback::new(move |v: String| {
        if let Some(d) = from_input_value(&v) {
            date.set(d);
        }
    });
    let search_value = Signal::derive(move || search.get());
    let set_search = Callback::new(move |v: String| search.set(v));
    let month_value = Signal::derive(move || period.get().month.to_string());
    let set_month = Callback::new(move |v: String| {
        if let Ok(m) = v.parse::<u32>() {
            period.update(|p| p.month = m);
        }
    });
    let year_value = Signal::derive(move || period.get().year.to_string());
    let set_year = Callback::new(move |v: String| {
        if let Ok(y) = v.parse::<i32>() {
            period.update(|p| p.year = y);
        }
    });
    let month_options: Vec<(String, String)> = (1..=12u32)
        .map(|m| (m.to_string(), month_name(m).to_string()))
        .collect();
    let year_choices = Signal::derive(move || {
        year_options(year, period.get().year)
            .into_iter()
            .map(|y| (y.to_string(), y.to_string()))
            .collect::<Vec<_>>()
    });

    let tab_button = move |target: AttendanceTab, icon_name: &'static str, caption: &'static str| {
        view! {
            <button
                class=move || {
                    if tab.get() == target { "tab-button tab-button--active" } else { "tab-button" }
                }
                on:click=move |_| tab.set(target)
            >
                {icon(icon_name)}
                {format!(" {}", caption)}
            </button>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Attendance Management" subtitle="Track and manage employee attendance">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        vm.open_new(date.get_untracked());
                        show_modal.set(true);
                    }
                >
                    {icon("plus")}
                    " Mark Attendance"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <div class="card">
                <div class="tab-bar">
                    {tab_button(AttendanceTab::Daily, "calendar", "Daily Attendance")}
                    {tab_button(AttendanceTab::Monthly, "file-text", "Monthly Summary")}
                </div>
                <div class="filter-row">
                    <Show
                        when=move || tab.get() == AttendanceTab::Daily
                        fallback=move || view! {
                            <Select label="Month" value=month_value on_change=set_month options=month_options.clone() />
                            <Select label="Year" value=year_value on_change=set_year options=year_choices />
                            <button class="button button--secondary" on:click=recalculate>
                                {icon("refresh")}
                                " Recalculate"
                            </button>
                        }
                    >
                        <Input label="Date" input_type="date" value=date_value on_input=set_date />
                        <div class="button-group">
                            {AttendanceStatus::bulk_options()
                                .into_iter()
                                .map(|status| view! {
                                    <button
                                        class=format!("chip-button chip {}", status.color_class())
                                        on:click=move |_| bulk_mark(status)
                                    >
                                        {format!("Mark All {}", status.label())}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </Show>
                    <Input label="Search" value=search_value on_input=set_search placeholder="Search employees..." />
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <div class="loading">"Loading..."</div> }>
                    <Show
                        when=move || tab.get() == AttendanceTab::Daily
                        fallback=move || view! { <MonthlySummary summaries=filtered_summaries /> }
                    >
                        <DailyAttendance records=filtered_records on_edit=on_edit on_delete=on_delete />
                    </Show>
                </Show>
            </div>
            <FormDialog
                open=show_modal
                on_close=on_close
                title=Signal::derive(move || {
                    if vm.is_edit_mode() { "Edit Attendance".to_string() } else { "Mark Attendance".to_string() }
                })
            >
                <AttendanceDetails vm=vm on_saved=on_saved on_cancel=on_close />
            </FormDialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_confirm_names_status_and_date() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
        assert_eq!(
            bulk_confirm_text(AttendanceStatus::Holiday, day),
            "Mark all employees as holiday for 2025-10-26?"
        );
    }

    #[test]
    fn year_list_spans_neighbours_and_keeps_selection() {
        assert_eq!(year_options(2025, 2025), vec![2024, 2025, 2026]);
        assert_eq!(year_options(2025, 2021), vec![2021, 2024, 2025, 2026]);
    }
}
