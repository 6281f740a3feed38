//! Dashboard Page
//!
//! Sidebar, section title and the four content sections. The page owns the
//! `DashboardContext`, loads data on mount and polls every 30 seconds for as
//! long as it is open.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api::HttpBackend;
use crate::components::{ChartCanvas, FetchPanel, MenuToggle, PredictionPanel, Sidebar, StatCards};
use crate::state::{DashboardContext, Section};
use crate::workflows::spawn_refresh;

const REFRESH_INTERVAL_MS: u32 = 30_000;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = DashboardContext::new();
    let backend = HttpBackend::same_origin();
    provide_context(ctx.clone());
    provide_context(backend.clone());

    spawn_refresh(ctx.clone(), backend.clone());

    // The poll is never cleared
    let poll_ctx = ctx.clone();
    let poll_backend = backend;
    Interval::new(REFRESH_INTERVAL_MS, move || {
        spawn_refresh(poll_ctx.clone(), poll_backend.clone());
    })
    .forget();

    let toggled = ctx.sidebar_toggled;
    let nav = ctx.nav;

    view! {
        <div class=move || if toggled.get() { "d-flex toggled" } else { "d-flex" } id="wrapper">
            <Sidebar />

            <div id="page-content-wrapper" class="flex-grow-1">
                <nav class="navbar navbar-expand-lg navbar-dark bg-transparent py-4 px-4">
                    <div class="d-flex align-items-center">
                        <MenuToggle />
                        <h2 id="section-title" class="fs-2 m-0">
                            {move || nav.with(|nav| nav.title().to_string())}
                        </h2>
                    </div>
                </nav>

                <div class="container-fluid px-4">
                    <ContentSection section=Section::Dashboard>
                        <StatCards />
                        <div class="bg-card p-3 rounded shadow-sm mt-3">
                            <h5>"Weather Trends"</h5>
                            <ChartCanvas chart=ctx.weather_chart id="weatherChart" />
                        </div>
                    </ContentSection>

                    <ContentSection section=Section::Data>
                        <FetchPanel />
                    </ContentSection>

                    <ContentSection section=Section::Prediction>
                        <PredictionPanel />
                    </ContentSection>

                    <ContentSection section=Section::Visualization>
                        <div class="row g-3">
                            <div class="col-md-7">
                                <div class="bg-card p-3 rounded shadow-sm">
                                    <h5>"Risk Trend"</h5>
                                    <ChartCanvas chart=ctx.risk_trend_chart id="riskTrendChart" />
                                </div>
                            </div>
                            <div class="col-md-5">
                                <div class="bg-card p-3 rounded shadow-sm">
                                    <h5>"Feature Importance"</h5>
                                    <ChartCanvas
                                        chart=ctx.importance_chart
                                        id="importanceChart"
                                        width=360
                                        height=320
                                    />
                                </div>
                            </div>
                        </div>
                    </ContentSection>
                </div>
            </div>
        </div>
    }
}

/// Content container shown only while its section is active
#[component]
fn ContentSection(section: Section, children: Children) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let nav = ctx.nav;

    view! {
        <div
            id=section.element_id()
            class=move || {
                if nav.with(|nav| nav.is_visible(section)) {
                    "content-section"
                } else {
                    "content-section d-none"
                }
            }
        >
            {children()}
        </div>
    }
}
