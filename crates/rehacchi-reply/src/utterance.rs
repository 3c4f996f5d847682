//! One unit of reply content, with parallel text and voice renderings.

use serde::{Deserialize, Serialize};

/// A single conversational fragment. A spoken utterance fills `text`
/// and `voice`; a link utterance fills `text_link` and `voice_link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_link: Option<String>,
}

impl Utterance {
    pub fn spoken(text: String, voice: String) -> Self {
        Self {
            text: Some(text),
            voice: Some(voice),
            text_link: None,
            voice_link: None,
        }
    }

    pub fn link(text_link: String, voice_link: String) -> Self {
        Self {
            text: None,
            voice: None,
            text_link: Some(text_link),
            voice_link: Some(voice_link),
        }
    }

    /// Whether this utterance carries a link slot rather than speech.
    pub fn is_link(&self) -> bool {
        self.text_link.is_some() || self.voice_link.is_some()
    }
}
