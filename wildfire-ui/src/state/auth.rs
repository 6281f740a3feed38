//! Authentication State
//!
//! Loading flags and the transient banner of the login page, plus the
//! per-form code to message tables used when the identity provider
//! rejects a request.

use leptos::*;
use thiserror::Error;

use crate::api::IdentityError;

pub const LOGIN_SUCCESS: &str = "✅ Login successful! Redirecting to dashboard...";
pub const REGISTER_SUCCESS: &str = "✅ Account created successfully! Welcome to WildFire AI. Redirecting...";

/// Milliseconds before an error banner hides itself
pub const BANNER_TIMEOUT_MS: u32 = 5000;
/// Milliseconds between a successful sign-in and the dashboard redirect
pub const REDIRECT_DELAY_MS: u32 = 1000;

const LOGIN_MESSAGES: &[(&str, &str)] = &[
    ("auth/invalid-email", "❌ Invalid email address format."),
    ("auth/user-disabled", "❌ This account has been disabled."),
    (
        "auth/user-not-found",
        "❌ No account found! Please register first by clicking the \"Register\" tab above.",
    ),
    ("auth/wrong-password", "❌ Incorrect password. Please try again."),
    (
        "auth/invalid-credential",
        "❌ Invalid credentials. Please check your email and password, or register if you don't have an account.",
    ),
    ("auth/too-many-requests", "❌ Too many failed attempts. Please try again later."),
];

const REGISTER_MESSAGES: &[(&str, &str)] = &[
    (
        "auth/email-already-in-use",
        "❌ This email is already registered! Please use the \"Login\" tab to sign in.",
    ),
    ("auth/invalid-email", "❌ Invalid email address format."),
    (
        "auth/operation-not-allowed",
        "❌ Email/password registration is not enabled. Please contact support.",
    ),
    ("auth/weak-password", "❌ Password is too weak! Please use at least 6 characters."),
];

/// Which of the two forms was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn messages(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            AuthMode::Login => LOGIN_MESSAGES,
            AuthMode::Register => REGISTER_MESSAGES,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            AuthMode::Login => LOGIN_SUCCESS,
            AuthMode::Register => REGISTER_SUCCESS,
        }
    }

    /// Canned message for a provider code, if this form has one.
    pub fn message_for(&self, code: &str) -> Option<&'static str> {
        self.messages()
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, message)| *message)
    }

    /// Banner text for a failed submission.
    pub fn describe(&self, error: &AuthError) -> String {
        if let AuthError::Provider(err) = error {
            if let Some(message) = self.message_for(&err.code) {
                return message.to_string();
            }
        }
        format!("❌ {}", error)
    }
}

/// Failure of a login or registration attempt
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("{0}")]
    Provider(#[from] IdentityError),

    /// Backend refused or could not be asked to open a session
    #[error("Session verification failed")]
    Verification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: BannerKind::Danger,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "alert alert-success",
            BannerKind::Danger => "alert alert-danger",
        }
    }
}

/// Delayed action scheduled once a submit settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    HideBanner,
    Redirect,
}

/// Timers to start after a submit, as `(delay_ms, action)`. The banner
/// always hides after five seconds; a successful submit also redirects
/// after one.
pub fn follow_ups(redirect: bool) -> Vec<(u32, FollowUp)> {
    let mut actions = vec![(BANNER_TIMEOUT_MS, FollowUp::HideBanner)];
    if redirect {
        actions.push((REDIRECT_DELAY_MS, FollowUp::Redirect));
    }
    actions
}

/// Reactive state of the login page
#[derive(Debug, Clone, Copy)]
pub struct AuthState {
    pub login_loading: RwSignal<bool>,
    pub register_loading: RwSignal<bool>,
    /// `None` hides the banner
    pub banner: RwSignal<Option<Banner>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            login_loading: create_rw_signal(false),
            register_loading: create_rw_signal(false),
            banner: create_rw_signal(None),
        }
    }

    pub fn hide_banner(&self) {
        self.banner.set(None);
    }

    pub fn loading(&self, mode: AuthMode) -> RwSignal<bool> {
        match mode {
            AuthMode::Login => self.login_loading,
            AuthMode::Register => self.register_loading,
        }
    }
}
