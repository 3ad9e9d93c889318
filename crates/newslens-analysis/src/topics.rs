//! Controlled-vocabulary topic extraction.
//!
//! Matches article text against a fixed list of business topics and backfills
//! in vocabulary order until the requested count is reached, so the same text
//! always yields the same topic list.

/// Business topic vocabulary, in backfill priority order.
pub(crate) const VOCABULARY: &[&str] = &[
    "Stock Market",
    "Earnings",
    "Revenue",
    "Profit",
    "Loss",
    "Investment",
    "Growth",
    "Decline",
    "Innovation",
    "Technology",
    "Regulations",
    "Legal",
    "Lawsuit",
    "Competition",
    "Market Share",
    "Expansion",
    "International",
    "Product Launch",
    "Research",
    "Development",
    "Restructuring",
    "Layoffs",
    "Hiring",
    "Leadership",
    "Sustainability",
    "Environment",
    "Social Responsibility",
];

/// Minimum token length considered for label matching. Filters out articles,
/// prepositions, and similar short function words.
const MIN_TOKEN_LEN: usize = 4;

/// Extract `num_topics` topic labels from article text.
///
/// A vocabulary entry matches when its lowercased label appears in the text,
/// or when any alphabetic token of the text (length >= 4) appears within the
/// label. Matches are collected in vocabulary order; if fewer than
/// `num_topics` match, remaining slots are backfilled in vocabulary order.
/// The result is deduplicated, never empty (for `num_topics >= 1`), and
/// capped at `num_topics`.
#[must_use]
pub fn extract_topics(text: &str, num_topics: usize) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let tokens: Vec<String> = text_lower
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(ToString::to_string)
        .collect();

    let mut topics: Vec<String> = Vec::new();
    for &label in VOCABULARY {
        let label_lower = label.to_lowercase();
        let matched = text_lower.contains(&label_lower)
            || tokens.iter().any(|t| label_lower.contains(t.as_str()));
        if matched {
            topics.push(label.to_string());
        }
    }

    // Backfill in vocabulary order until the minimum count is met.
    for &label in VOCABULARY {
        if topics.len() >= num_topics {
            break;
        }
        if !topics.iter().any(|t| t == label) {
            topics.push(label.to_string());
        }
    }

    topics.truncate(num_topics);
    topics
}

/// Topic list for an article whose classification failed: the first
/// `num_topics` vocabulary entries, with no text matching.
#[must_use]
pub fn fallback_topics(num_topics: usize) -> Vec<String> {
    VOCABULARY
        .iter()
        .take(num_topics)
        .map(ToString::to_string)
        .collect()
}
