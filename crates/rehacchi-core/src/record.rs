//! The normalized result shape shared by both corpus adapters.

use serde::{Deserialize, Serialize};

/// Which corpus a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Reference,
    Wikipedia,
}

/// A single corpus result, normalized so the reply engine can treat
/// both sources uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub source: SourceTag,
    /// The input keyword this record matched, when one could be determined.
    /// Adapters compute this deterministically (first matching keyword).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit: Option<String>,
    /// Question text (reference) or article title (wikipedia).
    pub subject: String,
    /// Answer text (reference) or stripped lead summary (wikipedia).
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Name of the answering library (reference records only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    /// Article flagged as wanting for sources (wikipedia records only).
    #[serde(default)]
    pub incomplete: bool,
}
