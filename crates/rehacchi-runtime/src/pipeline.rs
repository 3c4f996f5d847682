//! End-to-end turn handling: user text in, utterance list out.

use parking_lot::Mutex;
use tracing::debug;

use rehacchi_core::{BotConfig, Result};
use rehacchi_reply::{ReplyEngine, Utterance};
use rehacchi_sources::{client, ReferenceSource, WikipediaSource};
use rehacchi_text::extract_keywords;

/// One conversation turn: extract keywords, query both corpora, fuse.
/// The engine sits behind a lock so a shared pipeline can hand out
/// random template picks from any task.
pub struct TalkPipeline {
    reference: ReferenceSource,
    wikipedia: WikipediaSource,
    engine: Mutex<ReplyEngine>,
}

impl TalkPipeline {
    pub fn new(config: &BotConfig) -> Result<Self> {
        let engine = ReplyEngine::new(config.quote_width, config.voice_max_chars);
        Self::with_engine(config, engine)
    }

    /// A pipeline whose template choices replay deterministically.
    pub fn seeded(config: &BotConfig, seed: u64) -> Result<Self> {
        let engine = ReplyEngine::seeded(seed, config.quote_width, config.voice_max_chars);
        Self::with_engine(config, engine)
    }

    fn with_engine(config: &BotConfig, engine: ReplyEngine) -> Result<Self> {
        let http = client::build_client(config.request_timeout_secs)?;
        Ok(Self {
            reference: ReferenceSource::new(http.clone(), config.reference_endpoint.as_str()),
            wikipedia: WikipediaSource::new(
                http,
                config.wikipedia_endpoint.as_str(),
                config.article_base_url.as_str(),
            ),
            engine: Mutex::new(engine),
        })
    }

    /// Produce the reply for one user turn. Never empty: blank input
    /// and failed lookups both land in the "don't know" reply.
    pub async fn respond(&self, text: &str) -> Vec<Utterance> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![self.engine.lock().no_result()];
        }
        let keywords = extract_keywords(trimmed);
        debug!("Extracted keywords {:?} from {:?}", keywords, trimmed);
        let (reference, wikipedia) = tokio::join!(
            self.reference.query(&keywords),
            self.wikipedia.query(&keywords),
        );
        self.engine.lock().compose(&keywords, &reference, &wikipedia)
    }

    /// An idle prompt for surfaces that greet the user first.
    pub fn waiting(&self) -> Utterance {
        self.engine.lock().waiting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_constructs_from_default_config() {
        assert!(TalkPipeline::new(&BotConfig::default()).is_ok());
    }

    #[test]
    fn test_waiting_prompt_is_spoken() {
        let pipeline = TalkPipeline::seeded(&BotConfig::default(), 7).unwrap();
        let utterance = pipeline.waiting();
        assert!(utterance.text.is_some());
        assert!(utterance.voice.is_some());
        assert!(!utterance.is_link());
    }
}
