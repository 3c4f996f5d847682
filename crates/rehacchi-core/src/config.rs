//! Runtime configuration for the talk service.

use serde::{Deserialize, Serialize};

/// Slack delivery settings for the notification channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token (`SLACK_API_TOKEN`); posting is disabled when absent.
    pub api_token: Option<String>,
    /// Target channel.
    pub channel: String,
    /// Display name used when posting.
    pub username: String,
    /// Icon emoji used when posting.
    pub icon_emoji: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            channel: "#botデバッグ用".to_string(),
            username: "れはっち".to_string(),
            icon_emoji: ":rehatch_1:".to_string(),
        }
    }
}

/// Top-level bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// HTTP server port.
    pub port: u16,
    /// Search endpoint of the collaborative reference database (レファ協).
    pub reference_endpoint: String,
    /// MediaWiki query endpoint for Japanese Wikipedia.
    pub wikipedia_endpoint: String,
    /// Base URL for human-readable article links.
    pub article_base_url: String,
    /// Per-request timeout for corpus queries, in seconds.
    pub request_timeout_secs: u64,
    /// Character cap applied to voice renderings.
    pub voice_max_chars: usize,
    /// Line width for quoted display blocks.
    pub quote_width: usize,
    /// Notification channel settings.
    pub slack: SlackConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            reference_endpoint: "https://crd.ndl.go.jp/api/refsearch".to_string(),
            wikipedia_endpoint: "https://ja.wikipedia.org/w/api.php".to_string(),
            article_base_url: "https://ja.wikipedia.org/wiki/".to_string(),
            request_timeout_secs: 10,
            voice_max_chars: 100,
            quote_width: 40,
            slack: SlackConfig::default(),
        }
    }
}

impl BotConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let slack = SlackConfig {
            api_token: std::env::var("SLACK_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            channel: std::env::var("SLACK_CHANNEL")
                .ok()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "#botデバッグ用".to_string()),
            ..SlackConfig::default()
        };

        Self {
            port,
            slack,
            ..Self::default()
        }
    }
}
