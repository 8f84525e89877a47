//! Sidebar with the navigation menu; groups expand in place.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    /// Route key for leaf entries, group id otherwise
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (route key, icon)
}

fn leaf(id: &'static str, icon: &'static str) -> MenuGroup {
    MenuGroup {
        id,
        label: tab_label_for_key(id),
        icon,
        items: vec![],
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        leaf("dashboard", "layout-dashboard"),
        MenuGroup {
            id: "masters",
            label: "Masters",
            icon: "database",
            items: vec![
                ("customers", "users"),
                ("employees", "user"),
                ("parts", "package"),
                ("machines", "cpu"),
            ],
        },
        leaf("enquiries", "file-text"),
        leaf("jobs", "briefcase"),
        leaf("routing", "git-branch"),
        leaf("shop-floor", "activity"),
        leaf("inventory", "box"),
        leaf("tooling", "tool"),
        leaf("challans", "truck"),
        leaf("quality", "check-circle"),
        leaf("maintenance", "wrench"),
        leaf("purchase", "shopping-cart"),
        leaf("billing", "receipt"),
        leaf("dispatch", "send"),
        MenuGroup {
            id: "attendance-group",
            label: "Attendance",
            icon: "clock",
            items: vec![
                ("attendance", "upload"),
                ("attendance-management", "calendar"),
            ],
        },
        leaf("expenses", "wallet"),
        leaf("reports", "bar-chart"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["masters".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = StoredValue::new(group.id.to_string());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children
                                    && ctx.active.get().as_deref() == Some(group_id.get_value().as_str())
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id.get_value();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&group_id.get_value())
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id.get_value())>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTE_KEYS;

    fn menu_keys() -> Vec<&'static str> {
        get_menu_groups()
            .into_iter()
            .flat_map(|g| {
                if g.items.is_empty() {
                    vec![g.id]
                } else {
                    g.items.iter().map(|(key, _)| *key).collect()
                }
            })
            .collect()
    }

    #[test]
    fn every_route_has_exactly_one_menu_entry() {
        let keys = menu_keys();
        assert_eq!(keys.len(), ROUTE_KEYS.len());
        for key in ROUTE_KEYS {
            assert_eq!(keys.iter().filter(|k| **k == key).count(), 1, "{}", key);
        }
    }

    #[test]
    fn menu_entries_have_labels() {
        for key in menu_keys() {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
    }
}
