//! Auth Routes
//!
//! - POST /api/auth/verify - Open a session for a signed-in browser

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{VerifyRequest, VerifyResponse};
use crate::api::state::AppState;
use crate::session::session_cookie;

/// POST /api/auth/verify
///
/// The identity provider authenticates in the browser; any non-empty ID
/// token is accepted here and exchanged for a session cookie.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyRequest>,
) -> Response {
    if req.token.as_deref().map_or(true, str::is_empty) {
        tracing::warn!("Session verification without a token");
        let body = VerifyResponse {
            success: false,
            error: Some("No token provided".to_string()),
        };
        return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
    }

    let id = state.sessions.create().await;
    tracing::info!("User session established");

    (
        [(header::SET_COOKIE, session_cookie(&id))],
        Json(VerifyResponse {
            success: true,
            error: None,
        }),
    )
        .into_response()
}
