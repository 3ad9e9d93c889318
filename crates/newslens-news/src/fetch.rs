//! Bing News RSS client.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::NewsError;
use crate::rss;
use newslens_core::Article;

const DEFAULT_SEARCH_BASE: &str = "https://www.bing.com";

/// HTTP client for the Bing News RSS search endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    search_base: String,
}

impl NewsClient {
    /// Build a client with the given request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying client cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, NewsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            search_base: DEFAULT_SEARCH_BASE.to_string(),
        })
    }

    /// Override the search base URL. Used by tests to point at a local mock.
    #[must_use]
    pub fn with_search_base(mut self, base: impl Into<String>) -> Self {
        self.search_base = base.into();
        self
    }

    /// Fetch up to `max` articles mentioning `company` from the news feed.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError`] on transport failure, a non-success status, or
    /// an unparseable feed.
    pub async fn fetch_articles(
        &self,
        company: &str,
        max: usize,
    ) -> Result<Vec<Article>, NewsError> {
        let encoded = utf8_percent_encode(company, NON_ALPHANUMERIC).to_string();
        let url = format!(
            "{}/news/search?q={encoded}&format=rss&mkt=en-US",
            self.search_base
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let articles = rss::parse_rss_feed(&body, max)?;
        tracing::debug!(company, count = articles.len(), "fetched news feed");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"<rss><channel>
        <item>
          <title>Acme Expands Overseas</title>
          <link>https://news.example.com/acme-expands</link>
          <description>Acme is expanding operations to new markets.</description>
        </item>
    </channel></rss>"#;

    #[tokio::test]
    async fn fetch_articles_parses_feed_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/search"))
            .and(query_param("q", "Acme Corp"))
            .and(query_param("format", "rss"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
            .mount(&server)
            .await;

        let client = NewsClient::new(5, "newslens-test")
            .expect("client")
            .with_search_base(server.uri());
        let articles = client.fetch_articles("Acme Corp", 10).await.expect("fetch");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Acme Expands Overseas");
    }

    #[tokio::test]
    async fn fetch_articles_surfaces_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = NewsClient::new(5, "newslens-test")
            .expect("client")
            .with_search_base(server.uri());
        let err = client
            .fetch_articles("Acme", 10)
            .await
            .expect_err("should fail");
        assert!(
            matches!(err, NewsError::UnexpectedStatus { status: 503, .. }),
            "unexpected error: {err}"
        );
    }
}
