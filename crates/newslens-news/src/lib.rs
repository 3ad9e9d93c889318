//! Article acquisition for newslens.
//!
//! Fetches company news from the Bing News RSS endpoint and falls back to a
//! generated catalog when live coverage is thin or disabled. Each article
//! leaves this crate with a derived display summary.

pub mod error;
pub mod fetch;
pub mod mock;

mod rss;

pub use error::NewsError;
pub use fetch::NewsClient;
pub use mock::mock_articles;

use newslens_core::Article;

/// Acquire up to `max` articles for a company.
///
/// With `use_mock` set, only the generated catalog is used. Otherwise the
/// Bing News RSS feed is fetched and, when it returns fewer than `max`
/// articles, the batch is topped up from the catalog so downstream analysis
/// always sees a usable set.
///
/// # Errors
///
/// Returns [`NewsError`] when the live fetch fails outright. Callers decide
/// whether that is fatal; a short-but-successful fetch is not an error.
pub async fn acquire_articles(
    client: &NewsClient,
    company: &str,
    max: usize,
    use_mock: bool,
) -> Result<Vec<Article>, NewsError> {
    if use_mock {
        return Ok(mock_articles(company, max));
    }

    let mut articles = client.fetch_articles(company, max).await?;
    if articles.len() < max {
        tracing::info!(
            company,
            fetched = articles.len(),
            wanted = max,
            "supplementing live articles with generated catalog"
        );
        let needed = max - articles.len();
        articles.extend(mock_articles(company, needed));
    }
    Ok(articles)
}
