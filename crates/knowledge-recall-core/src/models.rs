//! Content records and search results.
//!
//! [`ContentRecord`]s are owned by the record store; the core only reads
//! them. [`SearchResult`]s are built fresh for every query and handed to
//! the caller.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Maximum number of characters of record content carried in a [`SearchResult`].
pub const PREVIEW_CHARS: usize = 500;

/// Discriminator for the record variants held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Page,
    Video,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Page => "page",
            ContentKind::Video => "video",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(ContentKind::Page),
            "video" => Ok(ContentKind::Video),
            other => bail!("Unknown content kind: '{}'. Use page or video.", other),
        }
    }
}

/// A captured page or video as held by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Store-assigned identifier.
    pub id: i64,
    pub title: String,
    /// Full text body.
    pub content: String,
    /// Short summary, absent until the record has been summarized.
    pub summary: Option<String>,
    pub url: String,
    pub kind: ContentKind,
}

/// Fields supplied when adding a record to a store; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewRecord {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub url: String,
    #[serde(default)]
    pub kind: ContentKind,
}

/// A ranked hit returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub kind: ContentKind,
    /// The first [`PREVIEW_CHARS`] characters of the record content.
    pub content: String,
    /// Sum of the matching signal weights. Always greater than zero.
    pub score: u32,
    /// Per-signal match breakdown (populated when explain is requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreExplanation>,
}

/// Which signals matched for a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreExplanation {
    pub title_match: bool,
    pub content_match: bool,
    pub summary_match: bool,
}

/// Truncate `content` to at most [`PREVIEW_CHARS`] characters.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_idx, _)) => content[..byte_idx].to_string(),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_content_unchanged() {
        assert_eq!(preview("short body"), "short body");
    }

    #[test]
    fn test_preview_truncates_to_limit() {
        let long = "a".repeat(PREVIEW_CHARS + 250);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn test_preview_exact_length_unchanged() {
        let exact = "b".repeat(PREVIEW_CHARS);
        assert_eq!(preview(&exact), exact);
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        let text = "é".repeat(PREVIEW_CHARS + 1);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        assert_eq!("page".parse::<ContentKind>().unwrap(), ContentKind::Page);
        assert_eq!("video".parse::<ContentKind>().unwrap(), ContentKind::Video);
        assert!("podcast".parse::<ContentKind>().is_err());
        assert_eq!(ContentKind::Video.to_string(), "video");
    }

    #[test]
    fn test_result_serializes_lowercase_kind_without_explain() {
        let result = SearchResult {
            id: 7,
            title: "Rust".to_string(),
            url: "https://example.com".to_string(),
            kind: ContentKind::Page,
            content: "body".to_string(),
            score: 4,
            explain: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["kind"], "page");
        assert_eq!(json["score"], 4);
        assert!(json.get("explain").is_none());
    }
}
