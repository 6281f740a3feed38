//! Sidebar Navigation
//!
//! Section links switch the visible content section in place. The logout
//! entry is a plain external link so the router never intercepts it.

use leptos::*;

use crate::api::HttpBackend;
use crate::state::{DashboardContext, NavItem, NavOutcome, Section};
use crate::workflows::spawn_refresh;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="bg-dark border-end" id="sidebar-wrapper">
            <div class="sidebar-heading text-center py-4 fs-4 fw-bold text-uppercase">
                "🔥 WildFire AI"
            </div>
            <div class="list-group list-group-flush my-3">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <SectionLink section=section /> })
                    .collect_view()}
                <a
                    href="/logout"
                    rel="external"
                    id="logout-btn"
                    class="list-group-item list-group-item-action bg-transparent text-danger fw-bold"
                >
                    "Logout"
                </a>
            </div>
        </div>
    }
}

#[component]
fn SectionLink(section: Section) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let backend = use_context::<HttpBackend>().expect("HttpBackend not found");
    let nav = ctx.nav;

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        let outcome = nav.try_update(|nav| nav.click(NavItem::Section(section)));
        if let Some(NavOutcome::Switched { refresh: true }) = outcome {
            spawn_refresh(ctx.clone(), backend.clone());
        }
    };

    view! {
        <button
            type="button"
            data-section=section.key()
            class=move || {
                if nav.with(|nav| nav.is_active(NavItem::Section(section))) {
                    "list-group-item list-group-item-action bg-transparent active"
                } else {
                    "list-group-item list-group-item-action bg-transparent"
                }
            }
            on:click=on_click
        >
            {section.title()}
        </button>
    }
}

/// Button collapsing the sidebar
#[component]
pub fn MenuToggle() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let toggled = ctx.sidebar_toggled;

    view! {
        <button
            type="button"
            id="menu-toggle"
            class="btn btn-outline-light me-3"
            on:click=move |_| toggled.update(|t| *t = !*t)
        >
            "☰"
        </button>
    }
}
