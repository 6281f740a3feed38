//! Telegram bot notifications

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AlertError, AlertOutcome};

const TELEGRAM_API: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    client: Client,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramNotifier {
    pub fn new(client: Client, bot_token: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            client,
            bot_token,
            chat_id,
        }
    }

    /// Send a Markdown message to the configured chat.
    pub async fn send(&self, text: &str) -> AlertOutcome {
        let (Some(token), Some(chat_id)) = (self.bot_token.as_deref(), self.chat_id.as_deref())
        else {
            tracing::warn!("Telegram bot token or chat id missing, skipping Telegram alert");
            return AlertOutcome::failed("Telegram Config Missing");
        };

        match self.post(token, chat_id, text).await {
            Ok(()) => {
                tracing::info!("Telegram notification sent");
                AlertOutcome::delivered("Telegram Alert Sent")
            }
            Err(AlertError::Rejected(description)) => {
                tracing::error!("Telegram API error: {}", description);
                AlertOutcome::failed(format!("Telegram Error: {}", description))
            }
            Err(e) => {
                tracing::error!("Failed to send Telegram message: {}", e);
                AlertOutcome::failed(format!("Connection Error: {}", e))
            }
        }
    }

    async fn post(&self, token: &str, chat_id: &str, text: &str) -> Result<(), AlertError> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API, token);

        let reply: BotReply = self
            .client
            .post(url)
            .json(&SendMessage {
                chat_id,
                text,
                parse_mode: "Markdown",
            })
            .send()
            .await?
            .json()
            .await?;

        if reply.ok {
            Ok(())
        } else {
            Err(AlertError::Rejected(
                reply.description.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}
