//! Search corpus records.
//!
//! Field names are the wire contract of the reindex service and must not
//! change.

use serde::{Deserialize, Serialize};

/// Emitted `content` is cut to this many characters
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Words per minute used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// How many external link texts go into the metadata summary
pub const MAX_REFERENCES: usize = 3;

/// One piece of site content, normalized for indexing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// `page-<slug>` or `blog-<slug>`
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Plain text, at most [`MAX_CONTENT_CHARS`] characters
    pub content: String,

    /// Site-relative url
    pub url: String,

    /// `page`, `blog`, `videogames`, ...
    pub category: String,

    /// Comma-joined tags
    #[serde(default)]
    pub tags: String,

    /// `YYYY-MM-DDT00:00:00Z`, null for pages
    pub date: Option<String>,

    /// Blog-only statistics
    #[serde(flatten)]
    pub post: Option<PostMetadata>,
}

/// Extra fields carried by blog post records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Dated within the recent window
    pub recent: bool,

    /// Human-readable summary of code languages and references
    pub metadata: String,

    pub word_count: usize,

    pub reading_time_minutes: usize,

    pub code_languages: Vec<String>,
}

impl PostMetadata {
    /// Build the summary string from code languages and reference texts
    pub fn summarize(code_languages: &[String], references: &[String]) -> String {
        let mut parts = Vec::new();

        if !code_languages.is_empty() {
            parts.push(format!(
                "Contains code examples: {}",
                code_languages.join(", ")
            ));
        }

        if !references.is_empty() {
            let shown: Vec<&str> = references
                .iter()
                .take(MAX_REFERENCES)
                .map(String::as_str)
                .collect();
            parts.push(format!("References: {}", shown.join(", ")));
        }

        parts.join(". ")
    }
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes to read `words` words, rounded up
pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// The full payload written to stdout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    pub pages: Vec<ContentRecord>,
    pub blog_posts: Vec<ContentRecord>,
}

impl Corpus {
    /// Serialize as compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize as indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
