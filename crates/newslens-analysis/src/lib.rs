//! Comparative sentiment and topic analysis for newslens.
//!
//! Classifies article text with a finance-news lexicon, extracts topics from
//! a controlled business vocabulary, and aggregates a classified batch into
//! a sentiment distribution, pairwise coverage differences, and a topic
//! overlap report. The aggregation engine performs no I/O and is a pure
//! function of its input batch.

pub mod aggregate;
pub mod classify;
pub mod narrative;
pub mod sentiment;
pub mod topics;

pub use aggregate::{
    aggregate, AggregationOptions, AggregationResult, CoverageDifference, SentimentDistribution,
    TopicOverlap,
};
pub use classify::ClassifiedArticle;
pub use narrative::{compose_verdict, spoken_summary};
pub use sentiment::{classify_sentiment, lexicon_score, Sentiment};
pub use topics::extract_topics;
