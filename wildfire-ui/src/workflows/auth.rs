//! Login and Registration Workflow

use leptos::SignalSet;

use crate::api::{IdentityProvider, IdentitySession, SessionVerifier};
use crate::state::{AuthError, AuthMode, AuthState, Banner};

/// Values read from a login or registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Registration only
    pub display_name: String,
}

/// Sign in or create the account, then open a server session with the
/// resulting identity token.
pub async fn authenticate<P, V>(
    provider: &P,
    verifier: &V,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<IdentitySession, AuthError>
where
    P: IdentityProvider + ?Sized,
    V: SessionVerifier + ?Sized,
{
    let session = match mode {
        AuthMode::Login => {
            provider
                .sign_in(&credentials.email, &credentials.password)
                .await?
        }
        AuthMode::Register => {
            provider
                .create_account(
                    &credentials.email,
                    &credentials.password,
                    &credentials.display_name,
                )
                .await?
        }
    };

    match verifier.verify(session.id_token()).await {
        Ok(true) => Ok(session),
        Ok(false) => Err(AuthError::Verification),
        Err(e) => {
            tracing::warn!("Session verification request failed: {}", e);
            Err(AuthError::Verification)
        }
    }
}

/// Run a form submission against the page state.
///
/// Returns true when the caller should redirect to the dashboard. On
/// failure the form leaves its loading state and the banner shows the
/// form's message for the error.
pub async fn submit_auth<P, V>(
    state: &AuthState,
    provider: &P,
    verifier: &V,
    mode: AuthMode,
    credentials: &Credentials,
) -> bool
where
    P: IdentityProvider + ?Sized,
    V: SessionVerifier + ?Sized,
{
    let loading = state.loading(mode);
    loading.set(true);

    match authenticate(provider, verifier, mode, credentials).await {
        Ok(session) => {
            tracing::info!(uid = %session.uid, "Signed in");
            state.banner.set(Some(Banner::success(mode.success_message())));
            true
        }
        Err(e) => {
            tracing::warn!(?mode, "Authentication failed: {}", e);
            loading.set(false);
            state.banner.set(Some(Banner::danger(mode.describe(&e))));
            false
        }
    }
}
