//! Per-article classification.

use serde::Serialize;

use newslens_core::Article;

use crate::sentiment::{classify_sentiment, Sentiment};
use crate::topics::{extract_topics, fallback_topics};

/// An article carrying its sentiment label and topic list.
///
/// Both fields are assigned exactly once, here, before the batch reaches the
/// aggregation engine. Topics are ordered, deduplicated, and never empty for
/// a positive topic count.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub sentiment: Sentiment,
    pub topics: Vec<String>,
}

impl ClassifiedArticle {
    /// Classify an article's content into a sentiment label and topic list.
    ///
    /// Empty content is tolerated: it classifies Neutral with backfilled
    /// topics.
    #[must_use]
    pub fn classify(article: Article, num_topics: usize) -> Self {
        let sentiment = classify_sentiment(&article.content);
        let topics = extract_topics(&article.content, num_topics);
        Self {
            article,
            sentiment,
            topics,
        }
    }

    /// Degraded classification for an article whose classifier failed:
    /// Neutral sentiment and vocabulary-prefix topics. The article stays in
    /// the batch rather than being dropped.
    #[must_use]
    pub fn degraded(article: Article, num_topics: usize) -> Self {
        tracing::warn!(title = %article.title, "classification failed; degrading to neutral");
        Self {
            article,
            sentiment: Sentiment::Neutral,
            topics: fallback_topics(num_topics),
        }
    }
}
