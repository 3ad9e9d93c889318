//! Generated article catalog.
//!
//! Stands in for live coverage during development and tops up thin live
//! batches. Titles and bodies interpolate the company name into a fixed set
//! of templates spanning positive, negative, and neutral coverage.

use rand::seq::SliceRandom;

use newslens_core::Article;

/// Title suffix and body template pairs. `{company}` is replaced in both.
const CATALOG: &[(&str, &str)] = &[
    (
        "{company} Reports Strong Q2 Earnings",
        "{company} has reported strong earnings for Q2, exceeding analyst expectations. Revenue increased by 15% year-over-year, driven by strong sales in key markets. The company's stock price saw a significant jump following the announcement.",
    ),
    (
        "{company} Announces New Product Line",
        "{company} has announced a new product line aimed at expanding its market share. Analysts predict this move could significantly boost the company's revenue in the coming quarters.",
    ),
    (
        "{company} Faces Regulatory Scrutiny",
        "Regulators have raised concerns about {company}'s business practices, launching an investigation into potential anti-competitive behavior. The company's stock experienced volatility following the news.",
    ),
    (
        "{company} Expands to International Markets",
        "{company} is expanding its operations to international markets, with a focus on Asia and Europe. This strategic move is expected to drive growth and diversify revenue streams.",
    ),
    (
        "{company} Stock Soars on Positive News",
        "Shares of {company} surged today following positive news about its latest quarterly performance. Investors are optimistic about the company's growth trajectory.",
    ),
    (
        "{company} Faces Lawsuit from Competitors",
        "{company} is facing a lawsuit from competitors alleging intellectual property infringement. Legal experts suggest the case could have significant implications for the company's future products.",
    ),
    (
        "{company} Introduces Revolutionary Technology",
        "{company} has introduced groundbreaking technology that could revolutionize its industry. Early adopters have reported positive experiences with the new offering.",
    ),
    (
        "{company} CEO Speaks at Industry Conference",
        "The CEO of {company} delivered a keynote speech at a major industry conference, outlining the company's vision for the future and upcoming innovations.",
    ),
    (
        "{company} Partners with Major Tech Company",
        "{company} has formed a strategic partnership with a leading tech company to collaborate on next-generation products. The alliance is expected to accelerate innovation.",
    ),
    (
        "{company} Cuts Jobs Amid Restructuring",
        "{company} has announced a restructuring plan that includes job cuts across several departments. The company cites the need to streamline operations and improve efficiency.",
    ),
    (
        "{company} Recognized for Sustainability Efforts",
        "{company} has been recognized for its sustainability initiatives, receiving an industry award for environmental responsibility. The company has committed to achieving carbon neutrality by 2030.",
    ),
    (
        "{company} Quarterly Results Disappoint Investors",
        "{company}'s quarterly results fell short of analyst expectations, causing a dip in stock price. The company attributes the underperformance to supply chain challenges and increasing competition.",
    ),
];

/// Generate up to `max` articles for `company` by sampling the catalog
/// without replacement. Randomness affects only which templates appear, not
/// their content; the catalog holds 12 entries, so larger requests are
/// capped at 12.
#[must_use]
pub fn mock_articles(company: &str, max: usize) -> Vec<Article> {
    let mut indices: Vec<usize> = (0..CATALOG.len()).collect();
    indices.shuffle(&mut rand::rng());
    indices.truncate(max.min(CATALOG.len()));

    indices
        .into_iter()
        .map(|i| {
            let (title_tpl, body_tpl) = CATALOG[i];
            Article::new(
                title_tpl.replace("{company}", company),
                body_tpl.replace("{company}", company),
                None,
            )
        })
        .collect()
}
