use serde::{Deserialize, Serialize};

/// Maximum character length of a derived article summary (before the ellipsis).
pub const SUMMARY_MAX_CHARS: usize = 150;

/// A single news article prior to classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Headline text. Never empty.
    pub title: String,
    /// Full body text. May be empty for thin feed items.
    pub content: String,
    /// Display summary derived from `content` via [`summarize`].
    pub summary: String,
    /// Source URL. Absent for generated articles.
    pub url: Option<String>,
}

impl Article {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, url: Option<String>) -> Self {
        let content = content.into();
        let summary = summarize(&content);
        Self {
            title: title.into(),
            content,
            summary,
            url,
        }
    }
}

/// Derive a display summary: the first [`SUMMARY_MAX_CHARS`] characters of the
/// content, with a `...` suffix when truncated. Truncation is by character,
/// not byte, so multi-byte text is never split mid-codepoint.
#[must_use]
pub fn summarize(content: &str) -> String {
    let char_count = content.chars().count();
    if char_count <= SUMMARY_MAX_CHARS {
        return content.to_string();
    }
    let mut out: String = content.chars().take(SUMMARY_MAX_CHARS).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_returned_unchanged() {
        assert_eq!(summarize("brief update"), "brief update");
    }

    #[test]
    fn empty_content_yields_empty_summary() {
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn long_content_is_truncated_with_ellipsis() {
        let content = "x".repeat(200);
        let summary = summarize(&content);
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn exact_boundary_is_not_truncated() {
        let content = "y".repeat(SUMMARY_MAX_CHARS);
        assert_eq!(summarize(&content), content);
    }

    #[test]
    fn multibyte_content_truncates_on_char_boundary() {
        let content = "न".repeat(200);
        let summary = summarize(&content);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
    }

    #[test]
    fn article_new_derives_summary() {
        let article = Article::new("Title", "z".repeat(300), None);
        assert!(article.summary.ends_with("..."));
        assert_eq!(article.content.len(), 300);
    }
}
