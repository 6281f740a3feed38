//! Prediction Panel
//!
//! Weather inputs, the run button and the result panel. Inputs are sent as
//! typed; nothing is validated client-side.

use leptos::*;

use crate::api::HttpBackend;
use crate::state::DashboardContext;
use crate::workflows::run_prediction;

#[component]
pub fn PredictionPanel() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let backend = use_context::<HttpBackend>().expect("HttpBackend not found");
    let form = ctx.prediction_form;
    let prediction = ctx.prediction;

    let on_run = move |_| {
        let ctx = ctx.clone();
        let backend = backend.clone();
        spawn_local(async move {
            if let Err(e) = run_prediction(&ctx, &backend).await {
                tracing::error!("Prediction failed: {}", e);
                if let Err(alert_err) = window().alert_with_message(&format!("Prediction failed: {}", e)) {
                    tracing::error!("Alert failed: {:?}", alert_err);
                }
            }
        });
    };

    view! {
        <div class="bg-card p-4 rounded shadow-sm">
            <h5 class="mb-3">"Wildfire Risk Prediction"</h5>
            <div class="row g-3">
                <NumberField id="pred-temp" label="Temperature (°C)" value=form.temperature />
                <NumberField id="pred-humidity" label="Humidity (%)" value=form.humidity />
                <NumberField id="pred-wind" label="Wind Speed (km/h)" value=form.wind_speed />
                <NumberField id="pred-rain" label="Rainfall (mm)" value=form.rainfall />
                <NumberField id="pred-ndvi" label="NDVI" value=form.ndvi />
                <div class="col-md-4">
                    <label for="pred-hist" class="form-label">"Historical Fire"</label>
                    <select
                        id="pred-hist"
                        class="form-select"
                        prop:value=move || form.historical_fire.get()
                        on:change=move |ev| form.historical_fire.set(event_target_value(&ev))
                    >
                        <option value="0">"No"</option>
                        <option value="1">"Yes"</option>
                    </select>
                </div>
                <div class="col-md-6">
                    <label for="pred-phone" class="form-label">"Alert Phone Number (optional)"</label>
                    <input
                        type="tel"
                        id="pred-phone"
                        class="form-control"
                        placeholder="10-digit mobile number"
                        prop:value=move || form.phone_number.get()
                        on:input=move |ev| form.phone_number.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <button type="button" id="run-prediction" class="btn btn-danger mt-3" on:click=on_run>
                "Run Prediction"
            </button>

            <div
                id="prediction-result"
                class=move || if prediction.with(Option::is_some) { "mt-4" } else { "mt-4 d-none" }
            >
                {move || prediction.get().map(|result| view! {
                    <div id="risk-alert" class=format!("p-3 rounded {}", result.risk.css_class())>
                        <h4 id="risk-text" class="fw-bold mb-1">{result.risk_text}</h4>
                        <p class="mb-1">"Confidence: "<span id="confidence-text">{result.confidence_text}</span></p>
                        <p id="sms-status-text" class="mb-0 small">{result.sms_status_text}</p>
                        <p id="tg-status-text" class="mb-0 small">{result.telegram_status_text}</p>
                    </div>
                })}
            </div>
        </div>
    }
}

#[component]
fn NumberField(id: &'static str, label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="col-md-4">
            <label for=id class="form-label">{label}</label>
            <input
                type="number"
                step="any"
                id=id
                class="form-control"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
