//! App Root Component
//!
//! Routes `/` to the login page and `/dashboard` to the dashboard. The
//! server decides which of the two a visitor may see.

use leptos::*;
use leptos_router::*;

use crate::pages::{DashboardPage, LoginPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-vh-100">
                <Routes>
                    <Route path="/" view=LoginPage />
                    <Route path="/dashboard" view=DashboardPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="d-flex flex-column align-items-center justify-content-center min-vh-100 text-center">
            <div class="display-1 mb-3">"🔥"</div>
            <h1 class="mb-2">"Page Not Found"</h1>
            <p class="text-muted mb-4">"The page you're looking for doesn't exist."</p>
            <a href="/" rel="external" class="btn btn-primary">"Back to Login"</a>
        </div>
    }
}
