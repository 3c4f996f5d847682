//! Three-branch response fusion over the two corpus result sets.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use rehacchi_core::CanonicalRecord;
use rehacchi_text::shaping;

use crate::templates::{fill, ReplyTemplates};
use crate::utterance::Utterance;

/// Fuses reference and encyclopedia records into an ordered utterance
/// list. Template choice is random per call; the rng is owned so a
/// seeded engine replays the same conversation.
pub struct ReplyEngine {
    pub templates: ReplyTemplates,
    rng: SmallRng,
    quote_width: usize,
    voice_max_chars: usize,
}

impl ReplyEngine {
    pub fn new(quote_width: usize, voice_max_chars: usize) -> Self {
        Self::with_rng(SmallRng::from_entropy(), quote_width, voice_max_chars)
    }

    /// An engine with a fixed seed, for reproducible output.
    pub fn seeded(seed: u64, quote_width: usize, voice_max_chars: usize) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed), quote_width, voice_max_chars)
    }

    fn with_rng(rng: SmallRng, quote_width: usize, voice_max_chars: usize) -> Self {
        Self {
            templates: ReplyTemplates::default(),
            rng,
            quote_width,
            voice_max_chars,
        }
    }

    /// An idle prompt for when no input has arrived yet.
    pub fn waiting(&mut self) -> Utterance {
        let pair = pick(&mut self.rng, &self.templates.waiting);
        Utterance::spoken(pair.text.clone(), pair.voice.clone())
    }

    /// The "I don't know that place" reply.
    pub fn no_result(&mut self) -> Utterance {
        let pair = pick(&mut self.rng, &self.templates.no_result);
        Utterance::spoken(pair.text.clone(), pair.voice.clone())
    }

    /// Fuse both record sets into the reply. Always returns at least
    /// one utterance.
    pub fn compose(
        &mut self,
        keywords: &[String],
        reference: &[CanonicalRecord],
        wikipedia: &[CanonicalRecord],
    ) -> Vec<Utterance> {
        debug!(
            "Composing reply for {:?}: {} reference, {} encyclopedia records",
            keywords,
            reference.len(),
            wikipedia.len()
        );

        // Branch 1: neither corpus knows the place.
        if wikipedia.is_empty() && reference.is_empty() {
            return vec![self.no_result()];
        }

        // Branch 2: no article yet. The reply invites the user to
        // write one instead of using the reference data.
        if wikipedia.is_empty() {
            let pair = pick(&mut self.rng, &self.templates.no_article);
            return vec![Utterance::spoken(pair.text.clone(), pair.voice.clone())];
        }

        // Branch 3: the article carries the reply, the reference
        // question joins in when one ties to the same keyword.
        let wiki_hits = distinct_hits(wikipedia);
        let ref_hits = distinct_hits(reference);
        let shared: Vec<String> = wiki_hits
            .iter()
            .filter(|hit| ref_hits.contains(hit))
            .cloned()
            .collect();
        // No keyword common to both sources: prefer the encyclopedia's
        // own hits, then anything either source matched.
        let candidates = if !shared.is_empty() {
            shared
        } else if !wiki_hits.is_empty() {
            wiki_hits
        } else {
            ref_hits
        };
        let chosen: Option<String> = if candidates.is_empty() {
            None
        } else {
            Some(pick(&mut self.rng, &candidates).clone())
        };

        let mut wiki_pool: Vec<&CanonicalRecord> =
            wikipedia.iter().filter(|r| r.hit == chosen).collect();
        if wiki_pool.is_empty() {
            wiki_pool = wikipedia.iter().collect();
        }
        let wikidat = *pick(&mut self.rng, &wiki_pool);

        let ref_pool: Vec<&CanonicalRecord> = reference
            .iter()
            .filter(|r| {
                r.hit == chosen
                    || chosen
                        .as_deref()
                        .is_some_and(|hit| r.subject.contains(hit))
            })
            .collect();
        let refdat = if ref_pool.is_empty() {
            None
        } else {
            Some(*pick(&mut self.rng, &ref_pool))
        };

        let mut utterances = Vec::new();
        self.render_article(&mut utterances, wikidat, chosen.as_deref());
        if let Some(refdat) = refdat {
            self.render_reference(&mut utterances, refdat, chosen.as_deref());
        }
        utterances
    }

    fn render_article(
        &mut self,
        utterances: &mut Vec<Utterance>,
        wikidat: &CanonicalRecord,
        hit: Option<&str>,
    ) {
        let title = wikidat.subject.as_str();
        let summary = wikidat.body.as_str();
        let summary_voice = shaping::voice_text(summary, self.voice_max_chars);
        let url = wikidat.url.clone().unwrap_or_default();

        if let Some(hit) = hit {
            let pair = pick(&mut self.rng, &self.templates.acknowledge);
            utterances.push(Utterance::spoken(
                fill(&pair.text, &[("hit", hit)]),
                fill(&pair.voice, &[("hit", hit)]),
            ));
            let pair = pick(&mut self.rng, &self.templates.summary_with_hit);
            utterances.push(Utterance::spoken(
                fill(&pair.text, &[("hit", hit), ("summary", summary)]),
                fill(&pair.voice, &[("hit", hit), ("summary", &summary_voice)]),
            ));
            let link = &self.templates.article_link_with_hit;
            utterances.push(Utterance::link(
                fill(&link.text, &[("url", &url)]),
                fill(&link.voice, &[("hit", hit), ("url", &url)]),
            ));
        } else {
            let title_voice = shaping::voice_text(title, self.voice_max_chars);
            let pair = pick(&mut self.rng, &self.templates.summary_with_title);
            utterances.push(Utterance::spoken(
                fill(&pair.text, &[("title", title), ("summary", summary)]),
                fill(&pair.voice, &[("title", &title_voice), ("summary", &summary_voice)]),
            ));
            let link = &self.templates.article_link_with_title;
            utterances.push(Utterance::link(
                fill(&link.text, &[("url", &url)]),
                fill(&link.voice, &[("title", title), ("url", &url)]),
            ));
        }

        if wikidat.incomplete {
            let pair = pick(&mut self.rng, &self.templates.article_incomplete);
            utterances.push(Utterance::spoken(pair.text.clone(), pair.voice.clone()));
        }
    }

    fn render_reference(
        &mut self,
        utterances: &mut Vec<Utterance>,
        refdat: &CanonicalRecord,
        hit: Option<&str>,
    ) {
        let question_text = shaping::quote_block(&refdat.subject, self.quote_width);
        let question_voice = shaping::voice_text(&refdat.subject, self.voice_max_chars);
        let answer_text = shaping::quote_block(&refdat.body, self.quote_width);
        let lib = refdat.attribution.clone().unwrap_or_default();
        let lib_voice = shaping::voice_text(&lib, self.voice_max_chars);
        let url = refdat.url.clone().unwrap_or_default();

        let pair = pick(&mut self.rng, &self.templates.transition);
        utterances.push(Utterance::spoken(pair.text.clone(), pair.voice.clone()));

        let matched_hit = hit.filter(|h| refdat.hit.as_deref() == Some(*h));
        if let Some(hit) = matched_hit {
            let pair = pick(&mut self.rng, &self.templates.question_matched);
            utterances.push(Utterance::spoken(
                fill(&pair.text, &[("hit", hit), ("question", &question_text)]),
                fill(&pair.voice, &[("hit", hit), ("question", &question_voice)]),
            ));
        } else {
            let pair = pick(&mut self.rng, &self.templates.question_unmatched);
            utterances.push(Utterance::spoken(
                fill(&pair.text, &[("question", &question_text)]),
                fill(&pair.voice, &[("question", &question_voice)]),
            ));
        }

        let pair = pick(&mut self.rng, &self.templates.answered_by);
        utterances.push(Utterance::spoken(
            fill(&pair.text, &[("lib", &lib), ("answer", &answer_text)]),
            fill(&pair.voice, &[("lib", &lib_voice)]),
        ));

        let pair = pick(&mut self.rng, &self.templates.reaction);
        utterances.push(Utterance::spoken(pair.text.clone(), pair.voice.clone()));

        let pointer = &self.templates.database_pointer;
        utterances.push(Utterance::spoken(pointer.text.clone(), pointer.voice.clone()));

        let link = &self.templates.question_link;
        utterances.push(Utterance::link(
            fill(&link.text, &[("url", &url)]),
            fill(&link.voice, &[("url", &url)]),
        ));
    }
}

/// Uniform pick from a non-empty pool.
fn pick<'a, T>(rng: &mut SmallRng, pool: &'a [T]) -> &'a T {
    let at = rng.gen_range(0..pool.len());
    &pool[at]
}

/// Distinct non-null hit values, in first-appearance order.
fn distinct_hits(records: &[CanonicalRecord]) -> Vec<String> {
    let mut hits = Vec::new();
    for record in records {
        if let Some(hit) = &record.hit {
            if !hits.contains(hit) {
                hits.push(hit.clone());
            }
        }
    }
    hits
}
