//! Adapter for the Japanese Wikipedia revisions API.

use tracing::warn;

use rehacchi_core::{CanonicalRecord, Error, Result, SourceTag};

use crate::client;
use crate::wikitext;
use crate::xml;

/// Queries the encyclopedia's page-content API and normalizes its XML.
pub struct WikipediaSource {
    http: reqwest::Client,
    endpoint: String,
    article_base: String,
}

impl WikipediaSource {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        article_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            article_base: article_base.into(),
        }
    }

    /// Fetch records for the keywords. Lookup failures degrade to an
    /// empty set so the conversation can still answer.
    pub async fn query(&self, keywords: &[String]) -> Vec<CanonicalRecord> {
        match self.try_query(keywords).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Encyclopedia lookup failed, treating as no results: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_query(&self, keywords: &[String]) -> Result<Vec<CanonicalRecord>> {
        let titles = keywords.join("|");
        let body = client::fetch_text(
            &self.http,
            &self.endpoint,
            &[
                ("format", "xml"),
                ("utf8", ""),
                ("action", "query"),
                ("prop", "revisions"),
                ("rvprop", "content"),
                ("redirects", ""),
                ("titles", titles.as_str()),
            ],
        )
        .await?;
        parse_pages(&body, keywords, &self.article_base)
    }
}

/// Parse an `api` payload into canonical records. Pages without a
/// revision (titles that do not exist) are discarded.
fn parse_pages(body: &str, keywords: &[String], article_base: &str) -> Result<Vec<CanonicalRecord>> {
    let doc = roxmltree::Document::parse(body).map_err(|e| Error::Parse(e.to_string()))?;
    let root = doc.root_element();
    if !root.has_tag_name("api") {
        return Err(Error::Parse(format!(
            "expected api root, got {}",
            root.tag_name().name()
        )));
    }
    let Some(pages) = xml::descendant(root, "pages") else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for page in pages.children().filter(|n| n.has_tag_name("page")) {
        let Some(rev) = xml::descendant(page, "rev") else {
            continue;
        };
        let raw = xml::gathered_text(rev);
        if raw.is_empty() {
            continue;
        }
        let title = page.attribute("title").unwrap_or_default().to_string();
        let hit = compute_hit(keywords, &title, &raw);
        // The article link keeps the title verbatim, matching the
        // wiki's own URL scheme.
        let url = format!("{}{}", article_base, title);

        records.push(CanonicalRecord {
            source: SourceTag::Wikipedia,
            hit,
            subject: title,
            body: wikitext::lead_summary(&raw),
            url: Some(url),
            attribution: None,
            incomplete: wikitext::is_stub_flagged(&raw),
        });
    }
    Ok(records)
}

/// First input keyword contained in the page title, else the first
/// contained in one of the page's redirect aliases.
fn compute_hit(keywords: &[String], title: &str, raw: &str) -> Option<String> {
    if let Some(kw) = keywords.iter().find(|kw| title.contains(kw.as_str())) {
        return Some(kw.clone());
    }
    let aliases = wikitext::redirect_aliases(raw);
    keywords
        .iter()
        .find(|kw| aliases.iter().any(|alias| alias.contains(kw.as_str())))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ja.wikipedia.org/wiki/";

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    const FIXTURE: &str = r#"<api batchcomplete="">
  <query>
    <pages>
      <page pageid="123" ns="0" title="渋谷区">
        <revisions>
          <rev contentformat="text/x-wiki" xml:space="preserve">{{出典の明記|date=2020年}}'''渋谷区'''（しぶやく）は、[[東京都]]の[[特別区]]。

== 歴史 ==
古い街である。</rev>
        </revisions>
      </page>
      <page ns="0" title="存在しない記事" missing=""/>
    </pages>
  </query>
</api>"#;

    #[test]
    fn test_parse_fixture_record() {
        let records = parse_pages(FIXTURE, &kw(&["渋谷"]), BASE).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.source, SourceTag::Wikipedia);
        assert_eq!(record.subject, "渋谷区");
        assert_eq!(record.body, "渋谷区（しぶやく）は、東京都の特別区。");
        assert_eq!(record.hit.as_deref(), Some("渋谷"));
        assert!(record.incomplete);
    }

    #[test]
    fn test_article_url_keeps_title_verbatim() {
        let records = parse_pages(FIXTURE, &kw(&["渋谷"]), BASE).unwrap();
        assert_eq!(
            records[0].url.as_deref(),
            Some("https://ja.wikipedia.org/wiki/渋谷区")
        );
    }

    #[test]
    fn test_missing_page_discarded() {
        let records = parse_pages(FIXTURE, &kw(&["存在しない記事"]), BASE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subject, "渋谷区");
    }

    #[test]
    fn test_hit_from_redirect_alias() {
        let body = r#"<api><query><pages>
          <page pageid="9" ns="0" title="ハチ公">
            <revisions><rev>{{Redirect|忠犬ハチ公|銅像|ハチ公像}}犬の話。</rev></revisions>
          </page>
        </pages></query></api>"#;
        let records = parse_pages(body, &kw(&["忠犬"]), BASE).unwrap();
        assert_eq!(records[0].hit.as_deref(), Some("忠犬"));
    }

    #[test]
    fn test_hit_absent_when_nothing_matches() {
        let records = parse_pages(FIXTURE, &kw(&["北海道"]), BASE).unwrap();
        assert_eq!(records[0].hit, None);
    }

    #[test]
    fn test_unflagged_article_is_not_incomplete() {
        let body = r#"<api><query><pages>
          <page pageid="5" ns="0" title="原宿">
            <revisions><rev>'''原宿'''は[[渋谷区]]の地区。</rev></revisions>
          </page>
        </pages></query></api>"#;
        let records = parse_pages(body, &kw(&["原宿"]), BASE).unwrap();
        assert!(!records[0].incomplete);
        assert_eq!(records[0].body, "原宿は渋谷区の地区。");
    }

    #[test]
    fn test_payload_without_pages_is_empty() {
        let records = parse_pages(r#"<api batchcomplete=""/>"#, &kw(&["渋谷"]), BASE).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        assert!(parse_pages("やあ", &kw(&["渋谷"]), BASE).is_err());
    }
}
