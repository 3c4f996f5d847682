//! Slack `chat.postMessage` client.

use tracing::{debug, warn};

use rehacchi_core::{Error, Result, SlackConfig};

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Posts messages into the configured channel under the bot's name and
/// icon. Without an API token the notifier is disabled and every send
/// is a no-op.
pub struct SlackNotifier {
    http: reqwest::Client,
    config: SlackConfig,
}

impl SlackNotifier {
    pub fn new(config: SlackConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.api_token.is_some()
    }

    /// Post one message. Delivery failures are logged, never fatal:
    /// the chat reply itself already went out on the request path.
    pub async fn post(&self, text: &str) {
        match self.try_post(text).await {
            Ok(true) => {}
            Ok(false) => debug!("Slack notifier disabled, dropping message"),
            Err(e) => warn!("Slack post failed: {}", e),
        }
    }

    async fn try_post(&self, text: &str) -> Result<bool> {
        let Some(token) = &self.config.api_token else {
            return Ok(false);
        };
        let payload = serde_json::json!({
            "channel": self.config.channel,
            "text": text,
            "icon_emoji": self.config.icon_emoji,
            "username": self.config.username,
        });
        let response = self
            .http
            .post(POST_MESSAGE_URL)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        if body.get("ok").and_then(|v| v.as_bool()) != Some(true) {
            let reason = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown");
            return Err(Error::Notify(reason.to_string()));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_token() {
        let notifier = SlackNotifier::new(SlackConfig::default());
        assert!(!notifier.is_enabled());
    }

    #[test]
    fn test_enabled_with_token() {
        let config = SlackConfig {
            api_token: Some("xoxb-test".to_string()),
            ..SlackConfig::default()
        };
        let notifier = SlackNotifier::new(config);
        assert!(notifier.is_enabled());
    }
}
