//! Auth Banner
//!
//! Transient success or error message above the login forms.

use leptos::*;

use crate::state::Banner;

#[component]
pub fn AuthBanner(banner: RwSignal<Option<Banner>>) -> impl IntoView {
    view! {
        <div
            id="auth-message"
            role="alert"
            class=move || {
                banner
                    .with(|banner| banner.as_ref().map(Banner::css_class))
                    .unwrap_or("alert d-none")
            }
        >
            {move || banner.get().map(|banner| banner.message)}
        </div>
    }
}
