//! Login Sessions
//!
//! Identity is established in the browser; the server only records that a
//! signed-in user handed over an ID token. The token itself is not kept.
//! Sessions live in memory, keyed by an opaque cookie, and expire after
//! the configured lifetime.

use axum::http::{header, HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "wildfire_session";

/// In-memory session store
#[derive(Debug)]
pub struct SessionStore {
    /// Session id to creation time
    sessions: RwLock<HashMap<String, Instant>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Open a session, returning its id. Expired sessions are pruned.
    pub async fn create(&self) -> String {
        let id = Uuid::new_v4().simple().to_string();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, created_at| created_at.elapsed() < self.ttl);
        sessions.insert(id.clone(), Instant::now());

        tracing::debug!(active = sessions.len(), "Session created");
        id
    }

    pub async fn is_active(&self, id: &str) -> bool {
        self.sessions
            .read()
            .await
            .get(id)
            .is_some_and(|created_at| created_at.elapsed() < self.ttl)
    }

    pub async fn remove(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Session id carried by the request's `Cookie` header
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Browser-session cookie for `id`
pub fn session_cookie(id: &str) -> HeaderValue {
    cookie_header(format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, id
    ))
}

/// Cookie that removes the session cookie
pub fn clear_cookie() -> HeaderValue {
    cookie_header(format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    ))
}

fn cookie_header(value: String) -> HeaderValue {
    // Session ids are uuid hex, always valid header text
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_remove() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create().await;

        assert!(store.is_active(&id).await);
        assert!(!store.is_active("unknown").await);

        store.remove(&id).await;
        assert!(!store.is_active(&id).await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_session() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create().await;
        assert!(!store.is_active(&id).await);
    }

    #[tokio::test]
    async fn test_create_prunes_expired() {
        let store = SessionStore::new(Duration::ZERO);
        store.create().await;
        store.create().await;
        assert_eq!(store.len().await, 1);

        let store = SessionStore::new(Duration::from_secs(60));
        let first = store.create().await;
        let second = store.create().await;
        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[test]
    fn test_session_id_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; wildfire_session=abc123; lang=en"),
        );
        assert_eq!(session_id(&headers).as_deref(), Some("abc123"));

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("wildfire_session="));
        assert_eq!(session_id(&headers), None);

        assert_eq!(session_id(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_values() {
        let cookie = session_cookie("abc123");
        assert_eq!(
            cookie.to_str().unwrap(),
            "wildfire_session=abc123; Path=/; HttpOnly; SameSite=Lax"
        );
        assert!(clear_cookie().to_str().unwrap().ends_with("Max-Age=0"));
    }
}
