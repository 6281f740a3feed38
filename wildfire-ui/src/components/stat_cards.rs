//! Stat Cards
//!
//! Active hotspot count and the global risk card with its border state.

use leptos::*;

use crate::state::DashboardContext;

#[component]
pub fn StatCards() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let active_hotspots = ctx.active_hotspots;
    let risk_label = ctx.risk_label;
    let risk_border = ctx.risk_border;

    view! {
        <div class="row g-3 my-2">
            <div class="col-md-6">
                <div class="bg-card p-3 shadow-sm rounded border-left-primary">
                    <p class="text-muted mb-1">"Active Hotspots"</p>
                    <h3 id="stat-active-fires" class="fw-bold">
                        {move || active_hotspots.get()}
                    </h3>
                </div>
            </div>
            <div class="col-md-6">
                <div class=move || {
                    format!("bg-card p-3 shadow-sm rounded {}", risk_border.get().css_class())
                }>
                    <p class="text-muted mb-1">"Global Risk Level"</p>
                    <h3 id="stat-risk-level" class="fw-bold">
                        {move || risk_label.get()}
                    </h3>
                </div>
            </div>
        </div>
    }
}
