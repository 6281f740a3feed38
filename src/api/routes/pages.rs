//! Page Routes
//!
//! The browser app is a single bundle; these routes serve its HTML shell
//! and gate the dashboard behind a session.
//!
//! - GET / - Login page (always signs the visitor out first)
//! - GET /dashboard - Dashboard, redirects to `/` without a session
//! - GET /logout - Clears the session, redirects to `/`

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::config::FirebaseConfig;
use crate::session::{clear_cookie, session_id};

/// wasm-bindgen output for the browser app, served from the static dir
pub const BUNDLE_PATH: &str = "/pkg/wildfire_ui.js";

/// GET /
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    end_session(&state, &headers).await;

    let shell = render_shell("WildFire AI - Login", Some(&state.config.firebase));
    ([(header::SET_COOKIE, clear_cookie())], Html(shell)).into_response()
}

/// GET /dashboard
pub async fn dashboard(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let signed_in = match session_id(&headers) {
        Some(id) => state.sessions.is_active(&id).await,
        None => false,
    };

    if !signed_in {
        return Redirect::to("/").into_response();
    }

    Html(render_shell("WildFire AI - Dashboard", None)).into_response()
}

/// GET /logout
pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    end_session(&state, &headers).await;
    ([(header::SET_COOKIE, clear_cookie())], Redirect::to("/")).into_response()
}

async fn end_session(state: &AppState, headers: &HeaderMap) {
    if let Some(id) = session_id(headers) {
        state.sessions.remove(&id).await;
        tracing::debug!("Session cleared");
    }
}

/// HTML shell that boots the browser app. The login page also gets the
/// Firebase web config as `window.FIREBASE_CONFIG`.
pub fn render_shell(title: &str, firebase: Option<&FirebaseConfig>) -> String {
    let config_script = firebase
        .map(|config| {
            let json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
            format!(
                "<script>window.FIREBASE_CONFIG = {};</script>\n",
                escape_script(&json)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.5/font/bootstrap-icons.css">
{config_script}<script type="module">import init from '{bundle}'; init();</script>
</head>
<body></body>
</html>
"#,
        title = title,
        config_script = config_script,
        bundle = BUNDLE_PATH,
    )
}

/// Keep JSON from closing the surrounding script element
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
