//! The analyze endpoint: acquisition, classification, aggregation, narrative,
//! and speech synthesis for one company.

use std::collections::BTreeMap;

use axum::{extract::State, Extension, Json};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use newslens_analysis::{
    aggregate, compose_verdict, spoken_summary, AggregationOptions, AggregationResult,
    ClassifiedArticle, CoverageDifference, SentimentDistribution,
};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Presentation wording for an empty common-topics set.
const NO_COMMON_TOPICS: &str = "No common topics found";

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    company_name: String,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeData {
    company: String,
    articles: Vec<ArticleReport>,
    comparative_sentiment: ComparativeReport,
    final_sentiment: String,
    /// Base64-encoded MP3 of the spoken summary. Null when synthesis failed;
    /// the textual analysis is still returned.
    audio: Option<String>,
}

/// Per-article display record: summary instead of the full body.
#[derive(Debug, Serialize)]
struct ArticleReport {
    title: String,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    sentiment: String,
    topics: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ComparativeReport {
    sentiment_distribution: SentimentDistribution,
    coverage_differences: Vec<CoverageDifference>,
    topic_overlap: TopicOverlapReport,
}

/// Presentation form of the overlap report: the empty common-topics set is
/// rendered as a one-element placeholder and unique-topic keys are 1-based
/// article labels.
#[derive(Debug, Serialize)]
struct TopicOverlapReport {
    common_topics: Vec<String>,
    unique_topics_by_article: BTreeMap<String, Vec<String>>,
}

pub(super) async fn analyze_company(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalyzeData>>, ApiError> {
    let company = request.company_name.trim();
    if company.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "company_name must not be empty",
        ));
    }

    let articles = newslens_news::acquire_articles(
        &state.news,
        company,
        state.config.news_max_articles,
        state.config.news_use_mock,
    )
    .await
    .map_err(|e| {
        tracing::error!(company, error = %e, "news acquisition failed");
        ApiError::new(req_id.0.clone(), "upstream_error", "news acquisition failed")
    })?;

    let classified: Vec<ClassifiedArticle> = articles
        .into_iter()
        .map(|a| ClassifiedArticle::classify(a, state.config.num_topics))
        .collect();

    let options = AggregationOptions {
        comparison_window: state.config.comparison_window,
        max_coverage_differences: state.config.max_coverage_differences,
    };
    let result = aggregate(&classified, &options);

    let final_sentiment = compose_verdict(company, &result.sentiment_distribution);
    let summary_text = spoken_summary(company, &final_sentiment);

    let audio = match state.speech.synthesize(&summary_text).await {
        Ok(bytes) => Some(base64::engine::general_purpose::STANDARD.encode(bytes)),
        Err(e) => {
            tracing::warn!(company, error = %e, "speech synthesis failed; returning analysis without audio");
            None
        }
    };

    tracing::info!(
        company,
        articles = classified.len(),
        positive = result.sentiment_distribution.positive,
        negative = result.sentiment_distribution.negative,
        neutral = result.sentiment_distribution.neutral,
        has_audio = audio.is_some(),
        "analysis complete"
    );

    let data = AnalyzeData {
        company: company.to_string(),
        articles: classified.into_iter().map(article_report).collect(),
        comparative_sentiment: comparative_report(result),
        final_sentiment,
        audio,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn article_report(classified: ClassifiedArticle) -> ArticleReport {
    ArticleReport {
        title: classified.article.title,
        summary: classified.article.summary,
        url: classified.article.url,
        sentiment: classified.sentiment.to_string(),
        topics: classified.topics,
    }
}

fn comparative_report(result: AggregationResult) -> ComparativeReport {
    let common_topics = if result.topic_overlap.has_common_topics() {
        result.topic_overlap.common_topics
    } else {
        vec![NO_COMMON_TOPICS.to_string()]
    };

    let unique_topics_by_article = result
        .topic_overlap
        .unique_topics_by_article
        .into_iter()
        .map(|(index, topics)| (format!("Article {}", index + 1), topics))
        .collect();

    ComparativeReport {
        sentiment_distribution: result.sentiment_distribution,
        coverage_differences: result.coverage_differences,
        topic_overlap: TopicOverlapReport {
            common_topics,
            unique_topics_by_article,
        },
    }
}
