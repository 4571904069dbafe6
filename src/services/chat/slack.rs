use async_trait::async_trait;
use serde_json::json;

use super::ChatTransport;
use crate::errors::AppError;

pub struct SlackChatProvider {
    bot_token: String,
    client: reqwest::Client,
}

impl SlackChatProvider {
    pub fn new(bot_token: String, client: reqwest::Client) -> Self {
        Self { bot_token, client }
    }
}

#[async_trait]
impl ChatTransport for SlackChatProvider {
    async fn post_message(
        &self,
        channel: &str,
        thread_ts: &str,
        text: &str,
    ) -> Result<(), AppError> {
        let body = json!({
            "channel": channel,
            "thread_ts": thread_ts,
            "text": text,
        });

        let resp = self
            .client
            .post("https://slack.com/api/chat.postMessage")
            .bearer_auth(&self.bot_token)
            .json(&body)
            .send()
            .await?;

        // Slack reports API failures as 200 with ok=false
        let data: serde_json::Value = resp.json().await?;
        if data["ok"].as_bool() != Some(true) {
            let reason = data["error"].as_str().unwrap_or("unknown error");
            return Err(AppError::Chat(format!(
                "chat.postMessage failed: {reason}"
            )));
        }

        Ok(())
    }
}
