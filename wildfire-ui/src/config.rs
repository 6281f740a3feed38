//! Page Configuration
//!
//! The hosting page injects the identity provider configuration as the
//! global `window.FIREBASE_CONFIG` object before the bundle loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Name of the page-global configuration object
pub const FIREBASE_CONFIG_GLOBAL: &str = "FIREBASE_CONFIG";

/// Firebase web app configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub auth_domain: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub storage_bucket: Option<String>,
    #[serde(default)]
    pub messaging_sender_id: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
}

impl FirebaseConfig {
    /// Read the configuration object injected by the hosting page.
    pub fn from_window() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;

        let value = js_sys::Reflect::get(&window, &JsValue::from_str(FIREBASE_CONFIG_GLOBAL))
            .map_err(|_| format!("Unable to read window.{}", FIREBASE_CONFIG_GLOBAL))?;

        if value.is_undefined() || value.is_null() {
            return Err(format!("window.{} is not defined", FIREBASE_CONFIG_GLOBAL));
        }

        let json: String = js_sys::JSON::stringify(&value)
            .map_err(|_| format!("window.{} is not serializable", FIREBASE_CONFIG_GLOBAL))?
            .into();

        Self::from_json(&json)
    }

    /// Parse the configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid Firebase config: {}", e))
    }

    /// API key, if present and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_config() {
        let config = FirebaseConfig::from_json(
            r#"{"apiKey":"AIza-test","authDomain":"wildfire.firebaseapp.com","projectId":"wildfire","storageBucket":null,"messagingSenderId":"42","appId":"1:42:web:abc"}"#,
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("AIza-test"));
        assert_eq!(config.project_id.as_deref(), Some("wildfire"));
        assert_eq!(config.storage_bucket, None);
    }

    #[test]
    fn test_empty_api_key_is_absent() {
        let config = FirebaseConfig::from_json(r#"{"apiKey":""}"#).unwrap();
        assert_eq!(config.api_key(), None);
    }
}
