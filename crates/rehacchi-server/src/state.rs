//! Shared application state.

use rehacchi_core::BotConfig;
use rehacchi_notify::SlackNotifier;
use rehacchi_runtime::TalkPipeline;

/// Shared state accessible from all route handlers.
pub struct AppState {
    pub config: BotConfig,
    pub pipeline: TalkPipeline,
    pub notifier: SlackNotifier,
}

impl AppState {
    pub fn new(config: BotConfig, pipeline: TalkPipeline) -> Self {
        let notifier = SlackNotifier::new(config.slack.clone());
        Self {
            config,
            pipeline,
            notifier,
        }
    }
}
