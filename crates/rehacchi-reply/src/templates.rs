//! The fixed Japanese phrase pools the reply engine draws from.
//!
//! Pools are plain data injected into the engine, so tests can swap
//! them out and the randomness stays in one place.

/// A template in its text-chat and voice-chat renderings. Slots are
/// written `{name}` and filled by [`fill`].
#[derive(Debug, Clone)]
pub struct TemplatePair {
    pub text: String,
    pub voice: String,
}

impl TemplatePair {
    fn new(text: &str, voice: &str) -> Self {
        Self {
            text: text.to_string(),
            voice: voice.to_string(),
        }
    }

    /// A pair whose text and voice renderings are the same string.
    fn same(both: &str) -> Self {
        Self::new(both, both)
    }
}

/// Replace every `{name}` slot with its value. Unknown slots are left
/// in place.
pub fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in slots {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

/// Every phrase pool the engine can draw from.
#[derive(Debug, Clone)]
pub struct ReplyTemplates {
    /// Idle prompts while waiting for input.
    pub waiting: Vec<TemplatePair>,
    /// Neither corpus returned anything.
    pub no_result: Vec<TemplatePair>,
    /// The encyclopedia has no article, invite the user to write one.
    pub no_article: Vec<TemplatePair>,
    /// Acknowledge the hit keyword. Slot: `{hit}`.
    pub acknowledge: Vec<TemplatePair>,
    /// Article summary when a hit keyword is known. Slots: `{hit}`, `{summary}`.
    pub summary_with_hit: Vec<TemplatePair>,
    /// Article summary introduced by its title. Slots: `{title}`, `{summary}`.
    pub summary_with_title: Vec<TemplatePair>,
    /// Link to the article when a hit keyword is known. Slots: `{hit}`, `{url}`.
    pub article_link_with_hit: TemplatePair,
    /// Link to the article introduced by its title. Slots: `{title}`, `{url}`.
    pub article_link_with_title: TemplatePair,
    /// The article is flagged as wanting for sources.
    pub article_incomplete: Vec<TemplatePair>,
    /// Pivot from the article to the reference question.
    pub transition: Vec<TemplatePair>,
    /// The question, tied to the hit keyword. Slots: `{hit}`, `{question}`.
    pub question_matched: Vec<TemplatePair>,
    /// The question, unrelated to the hit keyword. Slot: `{question}`.
    pub question_unmatched: Vec<TemplatePair>,
    /// The answering library and its answer. Slots: `{lib}`, `{answer}`.
    pub answered_by: Vec<TemplatePair>,
    /// A short reaction to the answer.
    pub reaction: Vec<TemplatePair>,
    /// Fixed pointer to the reference database itself.
    pub database_pointer: TemplatePair,
    /// Link to the question page. Slot: `{url}`.
    pub question_link: TemplatePair,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            waiting: vec![
                TemplatePair::new(
                    "やあ！レファレンス共同データベース のマスコット。れはっち だよ！",
                    "やあ！レファレンス共同データベース のマスコット。 れはっち だよ！",
                ),
                TemplatePair::same("全国の図書館に寄せられた疑問を紹介するよ。"),
                TemplatePair::same("気になっている場所はあるかな？"),
                TemplatePair::same("今はどこにいるのかな？"),
            ],
            no_result: vec![
                TemplatePair::same("その場所についてはよく知らないや。"),
                TemplatePair::same("ごめんね。 ちょっとその場所についてはよく分からないや。"),
                TemplatePair::same("んー。 よくわからないなあ。 別の言い方をしてみて。"),
                TemplatePair::new(
                    "よくわからないなあ。地名を 「○○」 というふうに書いてくれると分かりやすいかも。",
                    "よくわからないなあ。 まるまる という場所 という言い方をしてくれると分かりやすいかも。",
                ),
            ],
            no_article: vec![
                TemplatePair::same(
                    "まだWikipediaには、きみが気になってることは書かれていないみたい。もしきみが何か知っているなら、記事を書いてみない？",
                ),
                TemplatePair::same(
                    "わあー！きみが気になっていることは、まだWikipediaに書かれていないみたい。これはきみが記事を書くチャンスだよ！",
                ),
            ],
            acknowledge: vec![
                TemplatePair::same("{hit} だね！"),
                TemplatePair::same("{hit} が気になるのかな。"),
            ],
            summary_with_hit: vec![
                TemplatePair::same("Wikipediaによると、{hit} といえば、\n{summary}\nなんだって。"),
                TemplatePair::same("{hit} については、Wikipediaには、\n{summary}\nとあるね。"),
            ],
            summary_with_title: vec![
                TemplatePair::same(
                    "そういえば、Wikipediaの記事に {title} というのがあって、\n{summary}\nなんだって。",
                ),
                TemplatePair::same(
                    "ねえねえ。Wikipediaに {title} についての記事があって、\n{summary}\nと書かれているね。",
                ),
            ],
            article_link_with_hit: TemplatePair::new(
                "{url}",
                "{hit} に関するWikipedia記事のリンクだよ！\n{url}",
            ),
            article_link_with_title: TemplatePair::new(
                "{url}",
                "{title} についてのWikipedia記事のリンクだよ！\n{url}",
            ),
            article_incomplete: vec![
                TemplatePair::same(
                    "おや？ この記事はまだ十分でないみたい。もしきみが何か知ってることがあれば書き込んでみようよ。",
                ),
                TemplatePair::same(
                    "ねえねえ。まだこの記事は十分じゃないみたい。きみの知っていることを書き込むチャンスかもしれないよ。",
                ),
            ],
            transition: vec![
                TemplatePair::same("それとね。"),
                TemplatePair::same("あとねえ。"),
                TemplatePair::same("ふむふむ。"),
            ],
            question_matched: vec![
                TemplatePair::new(
                    "{hit} といえば、\n{question}\nという質問を図書館にした人がいるみたいだよ。",
                    "{hit} といえば、 {question} という質問を図書館にした人がいるみたいだよ。",
                ),
                TemplatePair::new(
                    "{hit} については、\n{question}\nということが気になっている人がいるみたいだよ。",
                    "{hit} といえば、 {question} ということが気になっている人がいるみたいだよ。",
                ),
            ],
            question_unmatched: vec![
                TemplatePair::new(
                    "そういえば、\n{question}\nという質問をした人がいるみたいだよ。",
                    "そういえば、 {question} という質問をした人がいるみたいだよ。",
                ),
                TemplatePair::new(
                    "そういえば、\n{question}\nということが気になっている人がいるみたいだよ。",
                    "そういえば、 {question} ということが気になっている人がいるみたいだよ。",
                ),
            ],
            answered_by: vec![
                TemplatePair::new(
                    "これには、{lib} の職員さんが答えてくれたんだ。\nそれによると、\n{answer}\nなんだって。",
                    "これには、{lib} の職員さんが答えてくれたんだ。",
                ),
                TemplatePair::new(
                    "この質問には、{lib} の職員さんが答えてくれたんだ。\nそれによると、\n{answer}\nなんだって。",
                    "この質問には、{lib} の職員さんが答えてくれたんだ。",
                ),
            ],
            reaction: vec![
                TemplatePair::same("おもしろいね！"),
                TemplatePair::same("興味深いね！"),
                TemplatePair::same("おどろきだね！"),
            ],
            database_pointer: TemplatePair::new(
                "もっと詳しく知りたいならレファレンス協同データベースをみてみてね！",
                "回答についてはレファ協データベースをみてみてね！リンクをチャットに送ったよ！",
            ),
            question_link: TemplatePair::same("質問についてのリンクだよ！\n{url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_slots() {
        assert_eq!(
            fill("{hit} だね！", &[("hit", "渋谷")]),
            "渋谷 だね！"
        );
    }

    #[test]
    fn test_fill_multiple_slots() {
        assert_eq!(
            fill("{hit} といえば、\n{question}\nだって。", &[("hit", "渋谷"), ("question", "由来は？")]),
            "渋谷 といえば、\n由来は？\nだって。"
        );
    }

    #[test]
    fn test_fill_leaves_unknown_slots() {
        assert_eq!(fill("{url}", &[("hit", "渋谷")]), "{url}");
    }

    #[test]
    fn test_default_pool_sizes() {
        let templates = ReplyTemplates::default();
        assert_eq!(templates.waiting.len(), 4);
        assert_eq!(templates.no_result.len(), 4);
        assert_eq!(templates.no_article.len(), 2);
        assert_eq!(templates.acknowledge.len(), 2);
        assert_eq!(templates.summary_with_hit.len(), 2);
        assert_eq!(templates.summary_with_title.len(), 2);
        assert_eq!(templates.article_incomplete.len(), 2);
        assert_eq!(templates.transition.len(), 3);
        assert_eq!(templates.question_matched.len(), 2);
        assert_eq!(templates.question_unmatched.len(), 2);
        assert_eq!(templates.answered_by.len(), 2);
        assert_eq!(templates.reaction.len(), 3);
    }

    #[test]
    fn test_voice_rendering_never_embeds_answer_body() {
        for pair in ReplyTemplates::default().answered_by {
            assert!(pair.text.contains("{answer}"));
            assert!(!pair.voice.contains("{answer}"));
        }
    }
}
