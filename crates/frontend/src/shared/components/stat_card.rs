use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard metric tile
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<String>,
    /// Accent: "primary" (default), "success", "warning", "error"
    #[prop(optional, into)]
    tone: MaybeProp<String>,
) -> impl IntoView {
    let class = move || match tone.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card stat-card--primary",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
