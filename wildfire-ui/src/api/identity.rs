//! Identity Provider
//!
//! Email/password sign-in and account creation. `FirebaseAuth` talks to the
//! Identity Toolkit REST API and reports failures with the same `auth/*`
//! codes the hosted web SDK uses.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::FirebaseConfig;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Provider failure carrying a machine-readable code such as
/// `auth/user-not-found` and the provider's own message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct IdentityError {
    pub code: String,
    pub message: String,
}

impl IdentityError {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let message = format!("Firebase: Error ({}).", code);
        Self { code, message }
    }

    /// Build from an Identity Toolkit error message, e.g. `EMAIL_NOT_FOUND`
    /// or `WEAK_PASSWORD : Password should be at least 6 characters`.
    pub fn from_rest_message(raw: &str) -> Self {
        let (name, detail) = match raw.split_once(" : ") {
            Some((name, detail)) => (name.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };

        let code = rest_error_code(name);
        let message = match detail {
            Some(detail) => format!("Firebase: {} ({}).", detail, code),
            None => format!("Firebase: Error ({}).", code),
        };

        Self { code, message }
    }
}

/// Map an Identity Toolkit error name to its `auth/*` code.
fn rest_error_code(name: &str) -> String {
    let code = match name {
        "EMAIL_NOT_FOUND" => "auth/user-not-found",
        "INVALID_PASSWORD" => "auth/wrong-password",
        "INVALID_LOGIN_CREDENTIALS" => "auth/invalid-credential",
        "USER_DISABLED" => "auth/user-disabled",
        "INVALID_EMAIL" => "auth/invalid-email",
        "MISSING_EMAIL" => "auth/missing-email",
        "MISSING_PASSWORD" => "auth/missing-password",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "auth/too-many-requests",
        "EMAIL_EXISTS" => "auth/email-already-in-use",
        "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => "auth/operation-not-allowed",
        "WEAK_PASSWORD" => "auth/weak-password",
        "API_KEY_INVALID" | "INVALID_API_KEY" => "auth/invalid-api-key",
        other => {
            return format!("auth/{}", other.to_ascii_lowercase().replace('_', "-"));
        }
    };
    code.to_string()
}

/// Signed-in user returned by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct IdentitySession {
    pub uid: String,
    pub email: String,
    id_token: String,
}

impl IdentitySession {
    pub fn new(uid: impl Into<String>, email: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            id_token: id_token.into(),
        }
    }

    /// Bearer identity token for the backend session exchange
    pub fn id_token(&self) -> &str {
        &self.id_token
    }
}

/// Hosted email/password identity provider
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError>;

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentitySession, IdentityError>;
}

/// Firebase Authentication over the Identity Toolkit REST API
#[derive(Debug, Clone)]
pub struct FirebaseAuth {
    config: Option<FirebaseConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    id_token: String,
}

#[derive(Deserialize)]
struct RestErrorBody {
    error: RestErrorDetail,
}

#[derive(Deserialize)]
struct RestErrorDetail {
    message: String,
}

impl FirebaseAuth {
    pub fn new(config: Option<FirebaseConfig>) -> Self {
        Self { config }
    }

    async fn password_call(
        &self,
        method: &str,
        request: &PasswordRequest<'_>,
    ) -> Result<IdentitySession, IdentityError> {
        let api_key = self
            .config
            .as_ref()
            .and_then(|c| c.api_key())
            .ok_or_else(|| IdentityError::new("auth/invalid-api-key"))?;

        let url = format!("{}/accounts:{}?key={}", IDENTITY_TOOLKIT_URL, method, api_key);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| IdentityError {
                code: "auth/internal-error".to_string(),
                message: e.to_string(),
            })?
            .send()
            .await
            .map_err(|_| IdentityError::new("auth/network-request-failed"))?;

        if !response.ok() {
            let message = response
                .json::<RestErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "INTERNAL_ERROR".to_string());
            return Err(IdentityError::from_rest_message(&message));
        }

        let body: PasswordResponse = response
            .json()
            .await
            .map_err(|_| IdentityError::new("auth/internal-error"))?;

        Ok(IdentitySession::new(body.local_id, body.email, body.id_token))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentitySession, IdentityError> {
        let request = PasswordRequest {
            email,
            password,
            display_name: None,
            return_secure_token: true,
        };
        self.password_call("signInWithPassword", &request).await
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentitySession, IdentityError> {
        let request = PasswordRequest {
            email,
            password,
            display_name: Some(display_name).filter(|name| !name.trim().is_empty()),
            return_secure_token: true,
        };
        self.password_call("signUp", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AuthError, AuthMode};

    #[test]
    fn test_rest_errors_map_to_sdk_codes() {
        assert_eq!(IdentityError::from_rest_message("EMAIL_NOT_FOUND").code, "auth/user-not-found");
        assert_eq!(IdentityError::from_rest_message("INVALID_PASSWORD").code, "auth/wrong-password");
        assert_eq!(IdentityError::from_rest_message("EMAIL_EXISTS").code, "auth/email-already-in-use");
        assert_eq!(
            IdentityError::from_rest_message("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled").code,
            "auth/too-many-requests"
        );
    }

    #[test]
    fn test_rest_error_detail_kept_in_message() {
        let err = IdentityError::from_rest_message("WEAK_PASSWORD : Password should be at least 6 characters");
        assert_eq!(err.code, "auth/weak-password");
        assert_eq!(err.message, "Firebase: Password should be at least 6 characters (auth/weak-password).");
    }

    #[test]
    fn test_unknown_rest_error_becomes_kebab_code() {
        let err = IdentityError::from_rest_message("CREDENTIAL_TOO_OLD_LOGIN_AGAIN");
        assert_eq!(err.code, "auth/credential-too-old-login-again");
        assert_eq!(err.message, "Firebase: Error (auth/credential-too-old-login-again).");
    }

    #[test]
    fn test_sign_up_request_shape() {
        let request = PasswordRequest {
            email: "ranger@example.com",
            password: "secret1",
            display_name: Some("Ranger"),
            return_secure_token: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["displayName"], "Ranger");
        assert_eq!(json["returnSecureToken"], true);
    }

    #[tokio::test]
    async fn test_missing_config_rejects_with_invalid_api_key() {
        let auth = FirebaseAuth::new(None);

        let err = auth.sign_in("ranger@example.com", "secret1").await.unwrap_err();
        assert_eq!(err.code, "auth/invalid-api-key");
        assert_eq!(err.message, "Firebase: Error (auth/invalid-api-key).");

        let banner = AuthMode::Login.describe(&AuthError::Provider(err));
        assert_eq!(banner, "❌ Firebase: Error (auth/invalid-api-key).");

        let err = auth
            .create_account("ranger@example.com", "secret1", "Ranger")
            .await
            .unwrap_err();
        assert_eq!(err.code, "auth/invalid-api-key");
    }

    #[tokio::test]
    async fn test_blank_api_key_rejects() {
        let auth = FirebaseAuth::new(Some(FirebaseConfig {
            api_key: Some(String::new()),
            ..FirebaseConfig::default()
        }));

        let err = auth.sign_in("ranger@example.com", "secret1").await.unwrap_err();
        assert_eq!(err.code, "auth/invalid-api-key");
    }
}
