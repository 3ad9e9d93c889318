//! Comparative aggregation across a classified batch.
//!
//! Derives three views over one batch: the sentiment distribution, pairwise
//! coverage-difference narratives within a bounded comparison window, and a
//! topic overlap report. The engine holds no state and performs no I/O;
//! aggregating the same batch twice yields identical output.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::classify::ClassifiedArticle;
use crate::sentiment::Sentiment;

/// Tuning knobs for the aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregationOptions {
    /// How many immediate successors each article is compared against.
    /// Bounds narrative output instead of producing all O(n^2) pairs.
    pub comparison_window: usize,
    /// Cap on emitted coverage-difference records; earliest are kept.
    pub max_coverage_differences: usize,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            comparison_window: 2,
            max_coverage_differences: 5,
        }
    }
}

/// Article counts per sentiment label. All three labels are always present;
/// the counts sum to the batch size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentDistribution {
    fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Total articles tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// One generated narrative contrasting two articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageDifference {
    pub comparison: String,
    pub impact: String,
}

/// Topics shared across articles versus topics unique to one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicOverlap {
    /// Topics appearing in two or more articles, sorted. May be empty; the
    /// "no common topics" wording belongs to the presentation layer.
    pub common_topics: Vec<String>,
    /// Per-article topics found in no other article, keyed by batch index.
    /// Articles with no unique topics are omitted.
    pub unique_topics_by_article: BTreeMap<usize, Vec<String>>,
}

impl TopicOverlap {
    #[must_use]
    pub fn has_common_topics(&self) -> bool {
        !self.common_topics.is_empty()
    }
}

/// Full output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    pub sentiment_distribution: SentimentDistribution,
    pub coverage_differences: Vec<CoverageDifference>,
    pub topic_overlap: TopicOverlap,
}

/// Aggregate a classified batch into its comparative views.
///
/// Total over its input: empty batches, duplicate titles, and (defensively)
/// empty topic lists all produce well-formed output.
#[must_use]
pub fn aggregate(batch: &[ClassifiedArticle], options: &AggregationOptions) -> AggregationResult {
    AggregationResult {
        sentiment_distribution: sentiment_distribution(batch),
        coverage_differences: coverage_differences(batch, options),
        topic_overlap: topic_overlap(batch),
    }
}

fn sentiment_distribution(batch: &[ClassifiedArticle]) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for article in batch {
        distribution.record(article.sentiment);
    }
    distribution
}

fn coverage_differences(
    batch: &[ClassifiedArticle],
    options: &AggregationOptions,
) -> Vec<CoverageDifference> {
    let mut differences = Vec::new();

    'pairs: for i in 0..batch.len() {
        let upper = (i + 1 + options.comparison_window).min(batch.len());
        for j in (i + 1)..upper {
            let first = &batch[i];
            let second = &batch[j];

            if first.sentiment != second.sentiment {
                differences.push(CoverageDifference {
                    comparison: format!(
                        "Article {} ({}) has a {} sentiment, while Article {} ({}) has a {} sentiment.",
                        i + 1,
                        first.article.title,
                        first.sentiment,
                        j + 1,
                        second.article.title,
                        second.sentiment,
                    ),
                    impact: "This contrast shows different perspectives on the company, \
                             potentially affecting investor perception."
                        .to_string(),
                });
                if differences.len() >= options.max_coverage_differences {
                    break 'pairs;
                }
            }

            let exclusive_first: Vec<&str> = first
                .topics
                .iter()
                .filter(|t| !second.topics.contains(t))
                .map(String::as_str)
                .collect();
            let exclusive_second: Vec<&str> = second
                .topics
                .iter()
                .filter(|t| !first.topics.contains(t))
                .map(String::as_str)
                .collect();

            if !exclusive_first.is_empty() && !exclusive_second.is_empty() {
                differences.push(CoverageDifference {
                    comparison: format!(
                        "Article {} focuses on {}, whereas Article {} covers {}.",
                        i + 1,
                        exclusive_first.join(", "),
                        j + 1,
                        exclusive_second.join(", "),
                    ),
                    impact: "This difference in focus highlights various aspects of the \
                             company's operations and market position."
                        .to_string(),
                });
                if differences.len() >= options.max_coverage_differences {
                    break 'pairs;
                }
            }
        }
    }

    if differences.is_empty() {
        differences.push(CoverageDifference {
            comparison: "The articles generally cover similar topics with similar sentiment."
                .to_string(),
            impact: "The consistency in reporting suggests a stable narrative around the company."
                .to_string(),
        });
    }

    differences
}

fn topic_overlap(batch: &[ClassifiedArticle]) -> TopicOverlap {
    // Each article contributes a topic at most once, even if its list is
    // malformed upstream.
    let topic_sets: Vec<HashSet<&str>> = batch
        .iter()
        .map(|a| a.topics.iter().map(String::as_str).collect())
        .collect();

    let mut occurrence: BTreeMap<&str, usize> = BTreeMap::new();
    for set in &topic_sets {
        for topic in set {
            *occurrence.entry(topic).or_insert(0) += 1;
        }
    }

    let common_topics: Vec<String> = occurrence
        .iter()
        .filter(|(_, &count)| count >= 2)
        .map(|(&topic, _)| topic.to_string())
        .collect();

    let mut unique_topics_by_article = BTreeMap::new();
    for (i, article) in batch.iter().enumerate() {
        let unique: Vec<String> = article
            .topics
            .iter()
            .filter(|topic| {
                !topic_sets
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && other.contains(topic.as_str()))
            })
            .cloned()
            .collect();
        if !unique.is_empty() {
            unique_topics_by_article.insert(i, unique);
        }
    }

    TopicOverlap {
        common_topics,
        unique_topics_by_article,
    }
}
