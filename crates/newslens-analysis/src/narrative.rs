//! Verdict and spoken-summary composition.

use crate::aggregate::SentimentDistribution;

/// Compose the single-sentence verdict for a company's coverage.
///
/// More positive than negative articles reads bullish, the reverse reads
/// cautionary, and a tie (including an empty batch) reads mixed.
#[must_use]
pub fn compose_verdict(company: &str, distribution: &SentimentDistribution) -> String {
    if distribution.positive > distribution.negative {
        format!("{company}'s latest news coverage is mostly positive. Potential stock growth expected.")
    } else if distribution.positive < distribution.negative {
        format!("{company}'s latest news coverage is mostly negative. Caution advised.")
    } else {
        format!("{company}'s latest news coverage is mixed. Monitor developments closely.")
    }
}

/// Build the spoken-language summary handed to speech synthesis.
///
/// The framing sentence is Hindi; the verdict is embedded verbatim.
#[must_use]
pub fn spoken_summary(company: &str, verdict: &str) -> String {
    format!("{company} के बारे में समाचार विश्लेषण। {verdict}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(positive: usize, negative: usize, neutral: usize) -> SentimentDistribution {
        SentimentDistribution {
            positive,
            negative,
            neutral,
        }
    }

    #[test]
    fn positive_majority_reads_bullish() {
        let verdict = compose_verdict("Acme", &distribution(3, 1, 2));
        assert!(verdict.contains("mostly positive"));
        assert!(verdict.starts_with("Acme"));
    }

    #[test]
    fn negative_majority_reads_cautionary() {
        let verdict = compose_verdict("Acme", &distribution(1, 4, 0));
        assert!(verdict.contains("mostly negative"));
    }

    #[test]
    fn tie_reads_mixed() {
        let verdict = compose_verdict("Acme", &distribution(2, 2, 1));
        assert!(verdict.contains("mixed"));
    }

    #[test]
    fn empty_batch_reads_mixed() {
        let verdict = compose_verdict("Acme", &distribution(0, 0, 0));
        assert!(verdict.contains("mixed"));
    }

    #[test]
    fn neutral_articles_do_not_tip_the_verdict() {
        let verdict = compose_verdict("Acme", &distribution(1, 0, 9));
        assert!(verdict.contains("mostly positive"));
    }

    #[test]
    fn spoken_summary_embeds_company_and_verdict() {
        let verdict = compose_verdict("Acme", &distribution(2, 0, 0));
        let summary = spoken_summary("Acme", &verdict);
        assert!(summary.starts_with("Acme"));
        assert!(summary.ends_with(&verdict));
    }
}
