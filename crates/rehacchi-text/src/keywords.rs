//! Heuristic keyword extraction — no morphological analyzer, just layered
//! surface heuristics: quoted spans, colloquial quotation markers, and
//! script-boundary segmentation.

/// Bracket pairs that mark a quoted keyword.
const BRACKET_PAIRS: [(&str, &str); 2] = [("\"", "\""), ("「", "」")];

/// Colloquial quotation markers ("...という話", "...ってゆう店").
/// The prefix before the earliest one is a keyword candidate.
const QUOTE_MARKERS: [&str; 4] = ["という", "とゆう", "てゆう", "ていう"];

/// Script class of a single character, for boundary segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '\u{3041}'..='\u{309F}' => CharClass::Hiragana,
        '\u{30A1}'..='\u{30FF}' => CharClass::Katakana,
        '\u{2E80}'..='\u{2FDF}'
        | '\u{3005}'..='\u{3007}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2EBEF}' => CharClass::Kanji,
        _ => CharClass::Other,
    }
}

/// Accept a candidate only if it is longer than one character and
/// strictly shorter than the whole input. Lengths are in characters.
fn push_candidate(span: &str, total_chars: usize, out: &mut Vec<String>) {
    let len = span.chars().count();
    if len > 1 && len < total_chars {
        out.push(span.to_string());
    }
}

fn quoted_spans(text: &str, total_chars: usize, out: &mut Vec<String>) {
    for (open, close) in BRACKET_PAIRS {
        let mut rest = text;
        loop {
            let Some(open_idx) = rest.find(open) else { break };
            let after_open = &rest[open_idx + open.len()..];
            let Some(close_idx) = after_open.find(close) else { break };
            let mut span = &after_open[..close_idx];
            // a stray opener inside the span: keep the part after it
            if let Some(inner) = span.find(open) {
                span = &span[inner + open.len()..];
            }
            push_candidate(span.trim(), total_chars, out);
            rest = &after_open[close_idx + close.len()..];
        }
    }
}

fn marker_prefix(text: &str, total_chars: usize, out: &mut Vec<String>) {
    let Some(cut) = QUOTE_MARKERS.iter().filter_map(|m| text.find(m)).min() else {
        return;
    };
    let prefix = text[..cut].trim_end_matches('っ').trim();
    push_candidate(prefix, total_chars, out);
}

fn script_segments(text: &str, total_chars: usize, out: &mut Vec<String>) {
    let mut buf = String::new();
    let mut prev = CharClass::Other;
    for c in text.chars() {
        let class = classify(c);
        if !buf.is_empty()
            && class != prev
            && class != CharClass::Other
            && prev != CharClass::Other
        {
            push_candidate(&buf, total_chars, out);
            buf.clear();
        }
        buf.push(c);
        prev = class;
    }
    push_candidate(&buf, total_chars, out);
}

/// Extract candidate keywords from a Japanese utterance.
///
/// Strategies run in priority order and the first one that yields any
/// candidate wins: quoted spans, then quotation-marker prefixes, then
/// script-boundary segments. Results are deduplicated in first-seen
/// order; when every strategy comes up empty, the whole trimmed input
/// is the single keyword.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let text = text.trim();
    let total_chars = text.chars().count();

    let mut found: Vec<String> = Vec::new();
    quoted_spans(text, total_chars, &mut found);
    if found.is_empty() {
        marker_prefix(text, total_chars, &mut found);
    }
    if found.is_empty() {
        script_segments(text, total_chars, &mut found);
    }

    let mut keywords: Vec<String> = Vec::new();
    for kw in found {
        if !keywords.contains(&kw) {
            keywords.push(kw);
        }
    }
    if keywords.is_empty() {
        keywords.push(text.to_string());
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_bracketed_span() {
        let kws = extract_keywords("れはっちは「渋谷」にいる");
        assert_eq!(kws, vec!["渋谷".to_string()]);
    }

    #[test]
    fn test_ascii_quoted_span() {
        let kws = extract_keywords("\"hello\"と言ってみた");
        assert_eq!(kws, vec!["hello".to_string()]);
    }

    #[test]
    fn test_quotation_marker_prefix() {
        let kws = extract_keywords("渋谷という場所にいるよ");
        assert_eq!(kws, vec!["渋谷".to_string()]);
    }

    #[test]
    fn test_marker_prefix_strips_small_tsu() {
        let kws = extract_keywords("まつりっていう祭り");
        assert_eq!(kws, vec!["まつり".to_string()]);
    }

    #[test]
    fn test_script_boundary_segmentation() {
        let kws = extract_keywords("東京タワーに行く");
        assert_eq!(kws, vec!["東京".to_string(), "タワー".to_string()]);
    }

    #[test]
    fn test_segmentation_boundary_at_script_change() {
        let kws = extract_keywords("いった渋谷");
        assert_eq!(kws, vec!["いった".to_string(), "渋谷".to_string()]);
    }

    #[test]
    fn test_quoted_span_beats_segmentation() {
        // Once brackets produce a candidate the later strategies are
        // skipped entirely.
        let kws = extract_keywords("「渋谷」と原宿タワー");
        assert_eq!(kws, vec!["渋谷".to_string()]);
    }

    #[test]
    fn test_single_char_candidates_rejected() {
        // The bracketed span and every segment are one character long,
        // so only the fallback survives.
        let kws = extract_keywords("「あ」");
        assert_eq!(kws, vec!["「あ」".to_string()]);
    }

    #[test]
    fn test_uniform_script_falls_back_to_input() {
        // A single segment equal to the whole input fails the length
        // guard, leaving the fallback.
        let kws = extract_keywords("はまつだい");
        assert_eq!(kws, vec!["はまつだい".to_string()]);
    }

    #[test]
    fn test_duplicates_collapsed() {
        let kws = extract_keywords("「渋谷」と「渋谷」");
        assert_eq!(kws, vec!["渋谷".to_string()]);
    }

    #[test]
    fn test_fallback_is_trimmed_input() {
        let kws = extract_keywords("  ねこ  ");
        assert_eq!(kws, vec!["ねこ".to_string()]);
    }

    #[test]
    fn test_lengths_counted_in_chars_not_bytes() {
        // Two characters (six bytes) inside the brackets must pass the
        // "longer than one" guard.
        let kws = extract_keywords("「犬山」に行きたいな");
        assert_eq!(kws, vec!["犬山".to_string()]);
    }
}
