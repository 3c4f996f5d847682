//! Wikitext markup reduction for encyclopedia page bodies.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use rehacchi_text::shaping;

static INNER_TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{[^{}]*\}\}").unwrap());
static ANY_TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{\{.*?\}\}").unwrap());
// A typed link carries its colon before any bracket, which keeps plain
// links on the same line out of the match.
static TYPED_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\[[^\[\]]*?:.*?\]\]").unwrap());
static REF_SELF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ref[^>]*/>").unwrap());
static REF_PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<ref[^>]*>.*?</ref>").unwrap());
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static WIKILINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[\[(.*?)\]\]").unwrap());

/// Markers whose presence in a raw page flags the article as lacking
/// sources.
const STUB_MARKERS: [&str; 2] = ["{{出典の明記|", "{{citation needed|"];

/// Markers that open a redirect-alias template.
const REDIRECT_MARKERS: [&str; 2] = ["{{redirect|", "{{Redirect|"];

/// Reduce a raw wikitext page to its plain-text lead section.
pub fn lead_summary(raw: &str) -> String {
    let mut text = raw.to_string();
    // Typed-link removal can expose templates that were nested inside a
    // caption, so both passes run twice.
    for _ in 0..2 {
        text = remove_templates(&text);
        text = TYPED_LINK_RE.replace_all(&text, " ").into_owned();
    }
    text = REF_SELF_RE.replace_all(&text, " ").into_owned();
    text = REF_PAIR_RE.replace_all(&text, " ").into_owned();
    text = COMMENT_RE.replace_all(&text, " ").into_owned();
    text = text.replace("'''", "");
    let trimmed = text.trim();
    let lead = match trimmed.find("\n\n") {
        Some(at) => &trimmed[..at],
        None => trimmed,
    };
    let resolved = resolve_links(lead);
    shaping::collapse_whitespace(&resolved)
}

/// Innermost template blocks first, so nesting unwinds outward, then a
/// lazy pass for unbalanced leftovers.
fn remove_templates(text: &str) -> String {
    let mut out = text.to_string();
    loop {
        let next = INNER_TEMPLATE_RE.replace_all(&out, " ").into_owned();
        if next == out {
            break;
        }
        out = next;
    }
    ANY_TEMPLATE_RE.replace_all(&out, " ").into_owned()
}

/// Replace `[[target|…|display]]` spans with the text after the last
/// pipe, or the target itself when there is no pipe.
pub fn resolve_links(text: &str) -> String {
    WIKILINK_RE
        .replace_all(text, |caps: &Captures| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            match inner.rfind('|') {
                Some(at) => inner[at + 1..].to_string(),
                None => inner.to_string(),
            }
        })
        .into_owned()
}

/// Whether the raw page carries a "sources wanted" template.
pub fn is_stub_flagged(raw: &str) -> bool {
    STUB_MARKERS.iter().any(|marker| raw.contains(marker))
}

/// Alias names listed by the page's redirect templates, in page order.
/// Empty when the page carries no redirect marker.
pub fn redirect_aliases(raw: &str) -> Vec<String> {
    let mut aliases = Vec::new();
    for marker in REDIRECT_MARKERS {
        if let Some(at) = raw.find(marker) {
            let rest = &raw[at + marker.len()..];
            let span = rest.split("}}").next().unwrap_or_default();
            aliases.extend(
                span.split('|')
                    .map(|alias| alias.trim().to_string())
                    .filter(|alias| !alias.is_empty()),
            );
        }
    }
    aliases
}
