//! Read-only register: one GET list endpoint shown through the list view.

use crate::shared::api_utils::get_json;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::data_table::{Column, DataTable};
use crate::shared::icons::icon;
use crate::shared::number_format::format_quantity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Numeric column shown without a trailing `.0`
pub fn quantity_column<T>(key: &'static str, label: &'static str) -> Column<T> {
    Column::new(key, label).with_format(|v, _| {
        v.as_f64().map(format_quantity).unwrap_or_default().into_any()
    })
}

#[component]
pub fn RegisterPage<T>(
    #[prop(into)] title: String,
    /// List endpoint, e.g. `/api/inventory`
    path: &'static str,
    columns: Vec<Column<T>>,
) -> impl IntoView
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    let rows = RwSignal::new(Vec::<T>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match get_json::<Vec<T>>(path).await {
                Ok(data) => {
                    rows.set(data);
                    error.set(None);
                }
                Err(e) => {
                    log::warn!("{} load failed: {}", path, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    load();

    view! {
        <div class="page">
            <PageHeader title=title>
                <button
                    class="button button--secondary"
                    prop:disabled=move || loading.get()
                    on:click=move |_| load()
                >
                    {icon("refresh")}
                    " Refresh"
                </button>
            </PageHeader>
            <ErrorBanner error=error />
            <DataTable columns=columns data=rows actions=false />
        </div>
    }
}
