//! Satellite Fetch Form

use leptos::*;

use crate::api::HttpBackend;
use crate::state::{DashboardContext, FetchStatus};
use crate::workflows::fetch_satellite_data;

#[component]
pub fn FetchPanel() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let backend = use_context::<HttpBackend>().expect("HttpBackend not found");
    let form = ctx.fetch_form;
    let status = ctx.fetch_status;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let ctx = ctx.clone();
        let backend = backend.clone();
        spawn_local(async move {
            fetch_satellite_data(&ctx, &backend).await;
        });
    };

    view! {
        <div class="bg-card p-4 rounded shadow-sm">
            <h5 class="mb-3">"Fetch Satellite & Weather Data"</h5>
            <form id="fetch-form" on:submit=on_submit>
                <div class="row g-3">
                    <div class="col-md-4">
                        <label for="region" class="form-label">"Region"</label>
                        <input
                            type="text"
                            id="region"
                            class="form-control"
                            placeholder="e.g. Uttarakhand"
                            required
                            prop:value=move || form.region.get()
                            on:input=move |ev| form.region.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <label for="from_date" class="form-label">"From"</label>
                        <input
                            type="date"
                            id="from_date"
                            class="form-control"
                            prop:value=move || form.from_date.get()
                            on:input=move |ev| form.from_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <label for="to_date" class="form-label">"To"</label>
                        <input
                            type="date"
                            id="to_date"
                            class="form-control"
                            prop:value=move || form.to_date.get()
                            on:input=move |ev| form.to_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <button type="submit" class="btn btn-primary mt-3">"Fetch Data"</button>
            </form>
            <div id="fetch-status" class="mt-3">
                {move || match status.get() {
                    FetchStatus::Idle => None,
                    current => Some(view! {
                        <div class=current.css_class()>{current.message()}</div>
                    }),
                }}
            </div>
        </div>
    }
}
