//! Shared text shaping — whitespace, URLs, brackets, quoting, and the
//! sentence-bounded voice cap. All lengths are in characters.

use once_cell::sync::Lazy;
use regex::Regex;

static WS_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?|ftp)://[-_.!~*'()a-zA-Z0-9;/?:@&=+$,%#]+").unwrap());

/// ASCII brackets normalized to their full-width forms before stripping.
const ASCII_TO_FULLWIDTH: [(char, char); 8] = [
    ('(', '（'),
    (')', '）'),
    ('<', '＜'),
    ('>', '＞'),
    ('{', '｛'),
    ('}', '｝'),
    ('[', '［'),
    (']', '］'),
];

/// Innermost (nesting-free) spans for the eight full-width pairs.
static BRACKET_SPAN_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"（[^（）]*）",
        r"【[^【】]*】",
        r"＜[^＜＞]*＞",
        r"［[^［］]*］",
        r"「[^「」]*」",
        r"｛[^｛｝]*｝",
        r"〔[^〔〕]*〕",
        r"〈[^〈〉]*〉",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Sentence terminators recognized by the voice cap.
const SENTENCE_ENDS: [char; 4] = ['。', '？', '.', '?'];

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WS_RUN_RE.replace_all(text, " ").trim().to_string()
}

/// Remove all whitespace characters.
pub fn strip_whitespace(text: &str) -> String {
    WS_RUN_RE.replace_all(text, "").into_owned()
}

/// Remove every http/https/ftp URL.
pub fn strip_urls(text: &str) -> String {
    URL_RE.replace_all(text, "").into_owned()
}

/// Delete bracketed spans for the eight full-width pairs, innermost
/// first, repeating until nothing matches. Terminates because every
/// deletion strictly shortens the string.
pub fn strip_brackets(text: &str) -> String {
    let mut out: String = text
        .chars()
        .map(|c| {
            ASCII_TO_FULLWIDTH
                .iter()
                .find(|(a, _)| *a == c)
                .map(|(_, f)| *f)
                .unwrap_or(c)
        })
        .collect();
    loop {
        let mut changed = false;
        for re in BRACKET_SPAN_RES.iter() {
            if re.is_match(&out) {
                out = re.replace_all(&out, "").into_owned();
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    out
}

/// Hard-wrap into a four-space-indented quote block for display.
pub fn quote_block(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|line| format!("    {}", line.iter().collect::<String>()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cap text for the voice surface by whole sentences.
///
/// Accumulates sentences while the running total stays within
/// `max_chars` and returns the accumulated prefix. A first sentence
/// that alone exceeds the cap is returned whole rather than cut
/// mid-sentence, and terminator-free text passes through unchanged.
pub fn shorten_for_voice(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut kept = String::new();
    let mut kept_chars = 0usize;
    let mut sentence = String::new();
    let mut sentence_chars = 0usize;
    for c in text.chars() {
        sentence.push(c);
        sentence_chars += 1;
        if SENTENCE_ENDS.contains(&c) {
            if kept_chars + sentence_chars > max_chars {
                if kept.is_empty() {
                    return sentence;
                }
                return kept;
            }
            kept.push_str(&sentence);
            kept_chars += sentence_chars;
            sentence.clear();
            sentence_chars = 0;
        }
    }
    if kept.is_empty() {
        // no terminator anywhere: nothing sentence-shaped to cut at
        text.to_string()
    } else {
        kept
    }
}

/// The composed voice sanitizer: strip whitespace, then URLs, then
/// brackets, then apply the sentence cap.
pub fn voice_text(text: &str, max_chars: usize) -> String {
    let t = strip_whitespace(text);
    let t = strip_urls(&t);
    let t = strip_brackets(&t);
    shorten_for_voice(&t, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  渋谷 \n\t 原宿  "), "渋谷 原宿");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("渋 谷\nと 原宿"), "渋谷と原宿");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(
            strip_urls("リンクだよ！https://example.com/a?b=1 みてね"),
            "リンクだよ！ みてね"
        );
    }

    #[test]
    fn test_strip_urls_keeps_non_ascii_tail() {
        // The URL character set is ASCII; a Japanese tail survives.
        assert_eq!(strip_urls("https://example.com/wikiだよ"), "だよ");
    }

    #[test]
    fn test_strip_brackets_nested() {
        assert_eq!(strip_brackets("渋谷（東京（日本））と原宿"), "渋谷と原宿");
    }

    #[test]
    fn test_strip_brackets_normalizes_ascii() {
        assert_eq!(strip_brackets("渋谷(しぶや)だよ"), "渋谷だよ");
    }

    #[test]
    fn test_strip_brackets_mixed_pairs() {
        assert_eq!(strip_brackets("「あれ」と【それ】"), "と");
    }

    #[test]
    fn test_strip_brackets_identity_when_bracket_free() {
        assert_eq!(strip_brackets("渋谷と原宿"), "渋谷と原宿");
    }

    #[test]
    fn test_strip_brackets_idempotent() {
        let once = strip_brackets("渋谷（東京【日本】）と「原宿」");
        assert_eq!(strip_brackets(&once), once);
    }

    #[test]
    fn test_quote_block_wraps_and_indents() {
        assert_eq!(quote_block("abcdefgh", 3), "    abc\n    def\n    gh");
    }

    #[test]
    fn test_quote_block_counts_chars_not_bytes() {
        assert_eq!(quote_block("あいうえお", 2), "    あい\n    うえ\n    お");
    }

    #[test]
    fn test_shorten_identity_under_cap() {
        assert_eq!(shorten_for_voice("こんにちは。", 100), "こんにちは。");
    }

    #[test]
    fn test_shorten_keeps_whole_sentences() {
        let first = format!("{}。", "あ".repeat(60));
        let second = format!("{}。", "い".repeat(60));
        let text = format!("{}{}", first, second);
        assert_eq!(shorten_for_voice(&text, 100), first);
    }

    #[test]
    fn test_shorten_drops_terminator_free_tail() {
        let text = format!("あいう。{}", "x".repeat(200));
        assert_eq!(shorten_for_voice(&text, 100), "あいう。");
    }

    #[test]
    fn test_shorten_overlong_first_sentence_kept_whole() {
        let text = format!("{}。おまけ。", "あ".repeat(120));
        let shortened = shorten_for_voice(&text, 100);
        assert_eq!(shortened.chars().count(), 121);
        assert!(shortened.ends_with('。'));
    }

    #[test]
    fn test_shorten_no_terminator_passes_through() {
        let text = "あ".repeat(150);
        assert_eq!(shorten_for_voice(&text, 100), text);
    }

    #[test]
    fn test_voice_text_composition() {
        let text = "渋谷 （東京） https://example.com はいいところだよ。";
        assert_eq!(voice_text(text, 100), "渋谷はいいところだよ。");
    }
}
