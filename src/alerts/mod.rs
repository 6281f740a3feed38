//! High Risk Alerts
//!
//! When a prediction comes back as high risk the server notifies people
//! over two channels: an SMS to the phone number given with the request
//! (Fast2SMS, then a GSM modem fallback) and a Telegram message to the
//! configured chat. Each channel reports a human-readable status that is
//! returned to the dashboard as-is.

pub mod sms;
pub mod telegram;

pub use sms::{Fast2Sms, GsmModem, SmsAlerter};
pub use telegram::TelegramNotifier;

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::AlertsConfig;

const ALERT_TIMEOUT: Duration = Duration::from_secs(15);

pub const UNKNOWN_REGION: &str = "Unknown Region";

/// Delivery failure on a single channel. The `Display` text is the status
/// shown to the user.
#[derive(Error, Debug)]
pub enum AlertError {
    #[error("{0}")]
    MissingConfig(&'static str),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq)]
pub struct AlertOutcome {
    pub delivered: bool,
    pub status: String,
}

impl AlertOutcome {
    pub fn delivered(status: impl Into<String>) -> Self {
        Self {
            delivered: true,
            status: status.into(),
        }
    }

    pub fn failed(status: impl Into<String>) -> Self {
        Self {
            delivered: false,
            status: status.into(),
        }
    }
}

/// Per-channel statuses for one high risk prediction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlertReport {
    pub sms_status: Option<String>,
    pub telegram_status: Option<String>,
}

pub fn sms_text(confidence: f64) -> String {
    format!(
        "URGENT: High Wildfire Risk detected! Confidence: {:.2}%",
        confidence
    )
}

pub fn telegram_text(confidence: f64, region: Option<&str>) -> String {
    let region = region
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(UNKNOWN_REGION);

    format!(
        "🔥 *Wildfire Alert*\nRisk: *High*\nConfidence: *{:.2}%*\nLocation: {}",
        confidence, region
    )
}

/// Sends high risk alerts over every channel
pub struct AlertDispatcher {
    sms: SmsAlerter,
    telegram: TelegramNotifier,
}

impl AlertDispatcher {
    pub fn new(sms: SmsAlerter, telegram: TelegramNotifier) -> Self {
        Self { sms, telegram }
    }

    pub fn from_config(config: &AlertsConfig) -> Self {
        let client = Client::builder()
            .timeout(ALERT_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            sms: SmsAlerter::new(Fast2Sms::new(client.clone(), config.fast2sms_api_key.clone())),
            telegram: TelegramNotifier::new(
                client,
                config.telegram_bot_token.clone(),
                config.telegram_chat_id.clone(),
            ),
        }
    }

    /// SMS goes out only when a phone number is given. Telegram is always
    /// attempted.
    pub async fn high_risk(
        &self,
        confidence: f64,
        phone_number: Option<&str>,
        region: Option<&str>,
    ) -> AlertReport {
        let mut report = AlertReport::default();

        if let Some(phone) = phone_number.map(str::trim).filter(|p| !p.is_empty()) {
            let outcome = self.sms.send(phone, &sms_text(confidence)).await;
            report.sms_status = Some(outcome.status);
        }

        let outcome = self
            .telegram
            .send(&telegram_text(confidence, region))
            .await;
        report.telegram_status = Some(outcome.status);

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_texts() {
        assert_eq!(
            sms_text(91.456),
            "URGENT: High Wildfire Risk detected! Confidence: 91.46%"
        );
        assert_eq!(
            telegram_text(88.0, Some("Uttarakhand")),
            "🔥 *Wildfire Alert*\nRisk: *High*\nConfidence: *88.00%*\nLocation: Uttarakhand"
        );
        assert!(telegram_text(88.0, None).ends_with("Location: Unknown Region"));
        assert!(telegram_text(88.0, Some("  ")).ends_with("Location: Unknown Region"));
    }

    #[tokio::test]
    async fn test_unconfigured_channels() {
        let dispatcher = AlertDispatcher::from_config(&AlertsConfig::default());

        let report = dispatcher.high_risk(93.0, Some("9876543210"), Some("Odisha")).await;
        assert_eq!(report.sms_status.as_deref(), Some("Simulated GSM SMS"));
        assert_eq!(report.telegram_status.as_deref(), Some("Telegram Config Missing"));
    }

    #[tokio::test]
    async fn test_sms_skipped_without_phone() {
        let dispatcher = AlertDispatcher::from_config(&AlertsConfig::default());

        let report = dispatcher.high_risk(93.0, Some(""), None).await;
        assert_eq!(report.sms_status, None);
        assert!(report.telegram_status.is_some());
    }
}
