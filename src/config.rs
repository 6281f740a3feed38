//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. Besides
//! the `WILDFIRE_*` variables, the conventional provider variables
//! (`FIREBASE_API_KEY`, `NASA_FIRMS_MAP_KEY`, `OPENWEATHER_API_KEY`, ...)
//! are honored so existing deployments keep working.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub firebase: FirebaseConfig,

    #[serde(default)]
    pub satellite: SatelliteConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub alerts: AlertsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled dashboard bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> String {
    "./static".to_string()
}

fn default_session_ttl() -> u64 {
    3600 // 1 hour
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Web SDK settings injected into the login page
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

/// NASA FIRMS and OpenWeatherMap access
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SatelliteConfig {
    pub firms_map_key: Option<String>,

    pub openweather_api_key: Option<String>,

    /// FIRMS country code the hotspot query covers
    #[serde(default = "default_country")]
    pub country: String,

    /// FIRMS sensor product
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_country() -> String {
    "IND".to_string()
}

fn default_source() -> String {
    "VIIRS_SNPP_NRT".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            firms_map_key: None,
            openweather_api_key: None,
            country: default_country(),
            source: default_source(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Prediction model service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Endpoint answering `{"features": [...]}` with a class and its
    /// probabilities. Unset means no trained model is available.
    pub url: Option<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            url: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// SMS and Telegram alert channels
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlertsConfig {
    pub fast2sms_api_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "wildfire=info,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("wildfire").join("config.toml")),
            Some(PathBuf::from("/etc/wildfire/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        // Server overrides
        if let Some(host) = var("WILDFIRE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("WILDFIRE_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = var("WILDFIRE_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // Firebase web SDK settings
        let firebase = &mut self.firebase;
        for (name, slot) in [
            ("FIREBASE_API_KEY", &mut firebase.api_key),
            ("FIREBASE_AUTH_DOMAIN", &mut firebase.auth_domain),
            ("FIREBASE_PROJECT_ID", &mut firebase.project_id),
            ("FIREBASE_STORAGE_BUCKET", &mut firebase.storage_bucket),
            ("FIREBASE_MESSAGING_SENDER_ID", &mut firebase.messaging_sender_id),
            ("FIREBASE_APP_ID", &mut firebase.app_id),
        ] {
            if let Some(value) = var(name) {
                *slot = Some(value);
            }
        }

        // Provider keys
        if let Some(key) = var("NASA_FIRMS_MAP_KEY") {
            self.satellite.firms_map_key = Some(key);
        }
        if let Some(key) = var("OPENWEATHER_API_KEY") {
            self.satellite.openweather_api_key = Some(key);
        }
        if let Some(url) = var("MODEL_URL") {
            self.model.url = Some(url);
        }
        if let Some(key) = var("FAST2SMS_API_KEY") {
            self.alerts.fast2sms_api_key = Some(key);
        }
        if let Some(token) = var("TELEGRAM_BOT_TOKEN") {
            self.alerts.telegram_bot_token = Some(token);
        }
        if let Some(chat) = var("TELEGRAM_CHAT_ID") {
            self.alerts.telegram_chat_id = Some(chat);
        }

        // Logging overrides
        if let Some(level) = var("WILDFIRE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WILDFIRE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# WildFire AI Configuration
#
# Environment variables override these settings:
# - WILDFIRE_HOST, WILDFIRE_PORT, WILDFIRE_STATIC_DIR
# - WILDFIRE_LOG_LEVEL, WILDFIRE_LOG_FORMAT
# - FIREBASE_API_KEY, FIREBASE_AUTH_DOMAIN, FIREBASE_PROJECT_ID,
#   FIREBASE_STORAGE_BUCKET, FIREBASE_MESSAGING_SENDER_ID, FIREBASE_APP_ID
# - NASA_FIRMS_MAP_KEY, OPENWEATHER_API_KEY
# - MODEL_URL
# - FAST2SMS_API_KEY, TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID

[server]
host = "0.0.0.0"
port = 8000

# Compiled dashboard bundle (wildfire-ui)
static_dir = "./static"

# Login session lifetime in seconds
session_ttl_secs = 3600

[firebase]
# apiKey = ""
# authDomain = ""
# projectId = ""
# storageBucket = ""
# messagingSenderId = ""
# appId = ""

[satellite]
# Without keys, hotspots and weather are simulated
# firms_map_key = ""
# openweather_api_key = ""
country = "IND"
source = "VIIRS_SNPP_NRT"
request_timeout_secs = 15

[model]
# Prediction service; /predict answers 500 until this is set
# url = "http://localhost:9000/predict"
request_timeout_secs = 15

[alerts]
# fast2sms_api_key = ""
# telegram_bot_token = ""
# telegram_chat_id = ""

[logging]
# EnvFilter directive
level = "wildfire=info,tower_http=debug"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8000");
        assert_eq!(config.server.session_ttl_secs, 3600);
        assert_eq!(config.satellite.country, "IND");
        assert!(config.model.url.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.firebase.api_key.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[firebase]
apiKey = "web-key"
projectId = "wildfire-demo"

[model]
url = "http://model:9000/predict"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.firebase.api_key.as_deref(), Some("web-key"));
        assert_eq!(config.firebase.project_id.as_deref(), Some("wildfire-demo"));
        assert_eq!(config.model.url.as_deref(), Some("http://model:9000/predict"));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WILDFIRE_PORT", "8123"),
            ("FIREBASE_API_KEY", "env-key"),
            ("NASA_FIRMS_MAP_KEY", "firms"),
            ("TELEGRAM_CHAT_ID", "42"),
            ("OPENWEATHER_API_KEY", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.firebase.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.satellite.firms_map_key.as_deref(), Some("firms"));
        assert_eq!(config.alerts.telegram_chat_id.as_deref(), Some("42"));
        assert!(config.satellite.openweather_api_key.is_none());
    }
}
