//! Login Page
//!
//! Login and registration tabs. Both forms exchange the provider's identity
//! token for a server session and move on to the dashboard.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::{FirebaseAuth, HttpBackend};
use crate::components::{AuthBanner, InlineLoading};
use crate::config::FirebaseConfig;
use crate::state::auth::{follow_ups, FollowUp};
use crate::state::{AuthMode, AuthState};
use crate::workflows::{submit_auth, Credentials};

const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = AuthState::new();

    let config = match FirebaseConfig::from_window() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Firebase config unavailable: {}", e);
            None
        }
    };
    let provider = FirebaseAuth::new(config);

    let (tab, set_tab) = create_signal(AuthMode::Login);

    view! {
        <div class="container d-flex align-items-center justify-content-center min-vh-100">
            <div class="bg-card p-4 rounded shadow" style="max-width: 440px; width: 100%;">
                <h2 class="text-center mb-1">"🔥 WildFire AI"</h2>
                <p class="text-center text-muted mb-4">"Wildfire risk monitoring"</p>

                <ul class="nav nav-tabs mb-3">
                    <TabButton label="Login" mode=AuthMode::Login tab=tab set_tab=set_tab />
                    <TabButton label="Register" mode=AuthMode::Register tab=tab set_tab=set_tab />
                </ul>

                <AuthBanner banner=state.banner />

                <div class=move || if tab.get() == AuthMode::Login { "" } else { "d-none" }>
                    <LoginForm state=state provider=provider.clone() />
                </div>
                <div class=move || if tab.get() == AuthMode::Register { "" } else { "d-none" }>
                    <RegisterForm state=state provider=provider />
                </div>
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    mode: AuthMode,
    tab: ReadSignal<AuthMode>,
    set_tab: WriteSignal<AuthMode>,
) -> impl IntoView {
    view! {
        <li class="nav-item">
            <button
                type="button"
                class=move || if tab.get() == mode { "nav-link active" } else { "nav-link" }
                on:click=move |_| set_tab.set(mode)
            >
                {label}
            </button>
        </li>
    }
}

#[component]
fn LoginForm(state: AuthState, provider: FirebaseAuth) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let loading = state.login_loading;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
            display_name: String::new(),
        };
        spawn_submit(state, provider.clone(), AuthMode::Login, credentials);
    };

    view! {
        <form id="login-form" on:submit=on_submit>
            <TextField id="login-email" label="Email" kind="email" value=email />
            <TextField id="login-password" label="Password" kind="password" value=password />
            <button type="submit" class="btn btn-primary w-100" prop:disabled=move || loading.get()>
                <span id="login-btn-text">"Login"</span>
                <InlineLoading id="login-spinner" loading=loading />
            </button>
        </form>
    }
}

#[component]
fn RegisterForm(state: AuthState, provider: FirebaseAuth) -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let loading = state.register_loading;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
            display_name: name.get_untracked(),
        };
        spawn_submit(state, provider.clone(), AuthMode::Register, credentials);
    };

    view! {
        <form id="register-form" on:submit=on_submit>
            <TextField id="register-name" label="Full Name" kind="text" value=name />
            <TextField id="register-email" label="Email" kind="email" value=email />
            <TextField id="register-password" label="Password" kind="password" value=password />
            <button type="submit" class="btn btn-success w-100" prop:disabled=move || loading.get()>
                <span id="register-btn-text">"Create Account"</span>
                <InlineLoading id="register-spinner" loading=loading />
            </button>
        </form>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label for=id class="form-label">{label}</label>
            <input
                type=kind
                id=id
                class="form-control"
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

fn spawn_submit(state: AuthState, provider: FirebaseAuth, mode: AuthMode, credentials: Credentials) {
    spawn_local(async move {
        let verifier = HttpBackend::same_origin();
        let redirect = submit_auth(&state, &provider, &verifier, mode, &credentials).await;

        for (delay, action) in follow_ups(redirect) {
            match action {
                FollowUp::HideBanner => {
                    Timeout::new(delay, move || state.hide_banner()).forget();
                }
                FollowUp::Redirect => {
                    Timeout::new(delay, || {
                        if let Err(e) = window().location().set_href(DASHBOARD_PATH) {
                            tracing::error!("Redirect failed: {:?}", e);
                        }
                    })
                    .forget();
                }
            }
        }
    });
}
