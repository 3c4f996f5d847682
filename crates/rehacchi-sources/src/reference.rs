//! Adapter for the collaborative reference database search API.

use tracing::warn;

use rehacchi_core::{CanonicalRecord, Error, Result, SourceTag};
use rehacchi_text::shaping;

use crate::client;
use crate::xml;

/// Queries the library reference-question database and normalizes its
/// XML result set.
pub struct ReferenceSource {
    http: reqwest::Client,
    endpoint: String,
}

impl ReferenceSource {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The search expression: an "any" match over the question field.
    fn query_expression(keywords: &[String]) -> String {
        format!("question any {}", keywords.join(" "))
    }

    /// Fetch records for the keywords. Lookup failures degrade to an
    /// empty set so the conversation can still answer.
    pub async fn query(&self, keywords: &[String]) -> Vec<CanonicalRecord> {
        match self.try_query(keywords).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Reference lookup failed, treating as no results: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_query(&self, keywords: &[String]) -> Result<Vec<CanonicalRecord>> {
        let expression = Self::query_expression(keywords);
        let body = client::fetch_text(
            &self.http,
            &self.endpoint,
            &[("type", "reference"), ("query", expression.as_str())],
        )
        .await?;
        parse_records(&body, keywords)
    }
}

/// Parse a `result_set` payload into canonical records.
fn parse_records(body: &str, keywords: &[String]) -> Result<Vec<CanonicalRecord>> {
    let doc = roxmltree::Document::parse(body).map_err(|e| Error::Parse(e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("result_set") {
        return Err(Error::Parse(format!(
            "expected result_set root, got {}",
            root.tag_name().name()
        )));
    }

    let mut records = Vec::new();
    for result in root.children().filter(|n| n.has_tag_name("result")) {
        let Some(reference) = xml::child_element(result, "reference") else {
            continue;
        };
        let question = shaping::collapse_whitespace(&xml::descendant_text(reference, "question"));
        let answer = shaping::collapse_whitespace(&xml::descendant_text(reference, "answer"));
        let url = shaping::collapse_whitespace(&xml::descendant_text(reference, "url"));
        let attribution = xml::descendant_text(reference, "lib-name");
        let tags: Vec<String> = reference
            .descendants()
            .filter(|n| n.has_tag_name("keyword"))
            .map(xml::gathered_text)
            .collect();
        let hit = compute_hit(keywords, &tags, &question);

        records.push(CanonicalRecord {
            source: SourceTag::Reference,
            hit,
            subject: question,
            body: answer,
            url: (!url.is_empty()).then_some(url),
            attribution: (!attribution.is_empty()).then_some(attribution),
            incomplete: false,
        });
    }
    Ok(records)
}

/// First input keyword contained in one of the record's keyword tags,
/// else the first contained in the question text.
fn compute_hit(keywords: &[String], tags: &[String], question: &str) -> Option<String> {
    keywords
        .iter()
        .find(|kw| tags.iter().any(|tag| tag.contains(kw.as_str())))
        .or_else(|| keywords.iter().find(|kw| question.contains(kw.as_str())))
        .cloned()
}
