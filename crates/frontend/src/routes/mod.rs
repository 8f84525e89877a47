//! Page keys and the session gate in front of the main layout.

use crate::layout::center::tabs::TabStrip;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{guard_view_for, GuardView};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::Spinner;

pub const DEFAULT_ROUTE: &str = "dashboard";

/// Every page reachable from the navigation, in menu order
pub const ROUTE_KEYS: [&str; 21] = [
    "dashboard",
    "customers",
    "employees",
    "parts",
    "machines",
    "enquiries",
    "jobs",
    "routing",
    "shop-floor",
    "inventory",
    "tooling",
    "challans",
    "quality",
    "maintenance",
    "purchase",
    "billing",
    "dispatch",
    "attendance",
    "attendance-management",
    "expenses",
    "reports",
];

pub fn is_known_route(key: &str) -> bool {
    ROUTE_KEYS.contains(&key)
}

/// Reads `active` from a query string such as `?active=jobs`
pub fn route_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

/// Query string written back into the address bar for the active page
pub fn query_for_route(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabStrip />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// Renders the spinner, the login page or the application depending on the session.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_auth();

    move || match guard_view_for(&session.get()) {
        GuardView::Spinner => view! {
            <div class="session-loading">
                <Spinner />
                <span>"Loading..."</span>
            </div>
        }
        .into_any(),
        GuardView::Login => view! { <LoginPage /> }.into_any(),
        GuardView::App => view! { <MainLayout /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_keys_are_unique() {
        let mut keys = ROUTE_KEYS.to_vec();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ROUTE_KEYS.len());
    }

    #[test]
    fn known_and_unknown_routes() {
        assert!(is_known_route("shop-floor"));
        assert!(is_known_route("attendance-management"));
        assert!(is_known_route(DEFAULT_ROUTE));
        assert!(!is_known_route("settings"));
        assert!(!is_known_route(""));
    }

    #[test]
    fn active_route_survives_the_query_string() {
        assert_eq!(route_from_query("?active=billing").as_deref(), Some("billing"));
        assert_eq!(route_from_query("active=jobs&x=1").as_deref(), Some("jobs"));
        assert_eq!(route_from_query(""), None);
        assert_eq!(route_from_query("?active="), None);
        assert_eq!(query_for_route("shop-floor"), "?active=shop-floor");
    }
}
