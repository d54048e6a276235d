//! Wire types for the Typefully API.

use serde::{Deserialize, Serialize};

/// Body of a draft-creation request.
///
/// Field names match the wire contract directly, with one exception: the API
/// expects `schedule-date` (hyphenated), declared here as a serde rename so
/// the mapping lives next to the field it applies to. Unset optional fields
/// are omitted from the serialized body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRequest {
    /// Plain-text content of the draft. Four consecutive newlines split the
    /// content into separate tweets; `threadify` does the same server-side.
    pub content: String,

    /// Ask the server to auto-split the content into a thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threadify: Option<bool>,

    /// Ask for a `share_url` in the response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<bool>,

    /// ISO-8601 timestamp (e.g. `2022-06-13T11:13:31.662Z`) or the literal
    /// `next-free-slot` for the earliest open slot.
    #[serde(rename = "schedule-date", skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,

    /// Enable the account's configured AutoRT on the published draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_retweet_enabled: Option<bool>,

    /// Enable the account's configured AutoPlug on the published draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_plug_enabled: Option<bool>,
}

impl DraftRequest {
    /// Create a request with only the required content set.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

/// Filter for the recently-scheduled listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Threads,
    Tweets,
}

impl ContentFilter {
    /// The literal query-parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threads => "threads",
            Self::Tweets => "tweets",
        }
    }
}
