//! Navigation rail: collapsible menu groups with the expanded set and the
//! scroll offset persisted per browser session, so a reload lands on the
//! same view without a visual jump.

use crate::layout::{section_label, use_active_section};
use crate::shared::icons::icon;
use crate::shared::prefs;
use crate::system::auth::context::use_auth;
use leptos::html;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (section key, icon)
}

/// Full tree for the two admin role spellings.
fn admin_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Dashboard",
            icon: "dashboard",
            items: vec![("d400_overview", "dashboard")],
        },
        MenuGroup {
            label: "Master Data",
            icon: "products",
            items: vec![
                ("a001_category", "categories"),
                ("a002_product", "products"),
                ("a003_branch", "branches"),
                ("a004_distributor", "distributors"),
                ("a005_customer", "customers"),
            ],
        },
        MenuGroup {
            label: "Laporan",
            icon: "reports",
            items: vec![
                ("d401_sales_report", "reports"),
                ("d402_financial_report", "finance"),
            ],
        },
        MenuGroup {
            label: "Pengaturan",
            icon: "settings",
            items: vec![("a006_user", "user"), ("a007_role", "roles")],
        },
    ]
}

/// Reduced tree for everyone else (cashiers, supervisors).
fn staff_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Dashboard",
            icon: "dashboard",
            items: vec![("d400_overview", "dashboard")],
        },
        MenuGroup {
            label: "Master Data",
            icon: "products",
            items: vec![
                ("a001_category", "categories"),
                ("a002_product", "products"),
                ("a005_customer", "customers"),
            ],
        },
        MenuGroup {
            label: "Laporan",
            icon: "reports",
            items: vec![("d401_sales_report", "reports")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let active = use_active_section();
    let auth = use_auth();

    let groups = if auth.is_admin() {
        admin_menu()
    } else {
        staff_menu()
    };

    // Restored once on mount, persisted on every toggle.
    let expanded = RwSignal::new(prefs::load_expanded_sections());
    let rail_ref = NodeRef::<html::Div>::new();

    let toggle_group = move |label: &str| {
        expanded.update(|sections| {
            *sections = prefs::toggle_section(std::mem::take(sections), label);
            prefs::save_expanded_sections(sections);
        });
    };

    // Re-apply the saved scroll offset after the expanded set re-renders,
    // so opening a section does not jump the rail.
    Effect::new(move |_| {
        expanded.track();
        if let Some(rail) = rail_ref.get() {
            rail.set_scroll_top(prefs::load_sidebar_scroll() as i32);
        }
    });

    view! {
        <div
            class="app-sidebar__content"
            node_ref=rail_ref
            on:scroll=move |_| {
                if let Some(rail) = rail_ref.get_untracked() {
                    prefs::save_sidebar_scroll(rail.scroll_top() as f64);
                }
            }
        >
            {groups.into_iter().map(|group| {
                let label = group.label;
                let is_expanded = move || expanded.get().iter().any(|s| s == label);
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| toggle_group(label)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, item_icon)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--child"
                                            class:app-sidebar__item--active=move || active.0.get() == key
                                            on:click=move |_| active.0.set(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item_icon)}
                                                <span>{section_label(key)}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
