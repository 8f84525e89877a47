use crate::dashboards::d400_shop_overview::api;
use crate::shared::browser::confirm;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::month_caption;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::dashboards::d400_shop_overview::dto::{DashboardMetrics, DashboardResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Card values in display order: label, icon, text, tone
pub fn metric_tiles(m: &DashboardMetrics) -> Vec<(&'static str, &'static str, String, &'static str)> {
    vec![
        ("Open Jobs", "briefcase", m.open_jobs.to_string(), "primary"),
        ("Completed Jobs", "check-circle", m.completed_jobs.to_string(), "success"),
        ("Monthly Turnover", "trending-up", format_money(m.monthly_turnover), "success"),
        ("Pending Challans", "send", m.pending_challans.to_string(), "warning"),
        ("Machine Utilization", "cpu", format!("{}%", m.machine_utilization), "primary"),
        ("Receivables", "wallet", format_money(m.receivables), "error"),
    ]
}

#[component]
pub fn ShopOverviewDashboard() -> impl IntoView {
    let data = RwSignal::new(DashboardResponse::default());
    let error = RwSignal::new(None::<String>);
    let seeding = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match api::get_dashboard().await {
                Ok(response) => {
                    data.set(response);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("dashboard load failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
    };
    load();

    let on_seed = move |_| {
        if !confirm("Load demo data into the database?") {
            return;
        }
        seeding.set(true);
        spawn_local(async move {
            match api::load_demo_data().await {
                Ok(()) => load(),
                Err(e) => error.set(Some(e)),
            }
            seeding.set(false);
        });
    };

    let tiles = move || {
        data.with(|d| metric_tiles(&d.metrics))
            .into_iter()
            .map(|(label, icon_name, value, tone)| {
                view! {
                    <StatCard label=label icon_name=icon_name value=Signal::derive(move || value.clone()) tone=tone />
                }
            })
            .collect_view()
    };

    let turnover = move || {
        let current = data.get();
        current
            .turnover
            .iter()
            .map(|point| {
                let width = format!("width: {:.0}%", current.bar_width(point.amount));
                view! {
                    <div class="bar-row">
                        <span class="bar-row__label">{month_caption(&point.month)}</span>
                        <div class="bar-row__track">
                            <div class="bar-row__fill" style=width></div>
                        </div>
                        <span class="bar-row__value">{format_money(point.amount)}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let statuses = move || {
        data.with(|d| d.jobs_by_status.clone())
            .into_iter()
            .map(|row| {
                view! {
                    <div class="status-row">
                        <Badge variant=row.status.badge_variant()>{row.status.label()}</Badge>
                        <span class="status-row__count">{row.count}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Shop floor at a glance">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    " Refresh"
                </button>
                <button class="button button--secondary" prop:disabled=move || seeding.get() on:click=on_seed>
                    {icon("database")}
                    " Load demo data"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <div class="stat-grid">{tiles}</div>
            <div class="dashboard-grid">
                <div class="card">
                    <h3 class="card__title">"Monthly Turnover"</h3>
                    {turnover}
                </div>
                <div class="card">
                    <h3 class="card__title">"Jobs by Status"</h3>
                    {statuses}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_format_money_and_percent() {
        let metrics = DashboardMetrics {
            open_jobs: 3,
            completed_jobs: 1,
            monthly_turnover: 14750.0,
            pending_challans: 2,
            machine_utilization: 67,
            receivables: 5900.0,
        };
        let tiles = metric_tiles(&metrics);
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0].2, "3");
        assert_eq!(tiles[2].2, "₹14,750");
        assert_eq!(tiles[4].2, "67%");
        assert_eq!(tiles[5].0, "Receivables");
    }
}
