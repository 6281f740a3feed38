//! Loading Component

use leptos::*;

/// Inline spinner shown while `loading` is set
#[component]
pub fn InlineLoading(
    #[prop(into)]
    id: String,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <span
            id=id
            class=move || {
                if loading.get() {
                    "spinner-border spinner-border-sm ms-2"
                } else {
                    "spinner-border spinner-border-sm ms-2 d-none"
                }
            }
            role="status"
        />
    }
}
