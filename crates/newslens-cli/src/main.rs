use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use newslens_analysis::{
    aggregate, compose_verdict, spoken_summary, AggregationOptions, AggregationResult,
    ClassifiedArticle,
};

#[derive(Debug, Parser)]
#[command(name = "newslens-cli")]
#[command(about = "Company news sentiment analysis from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze recent coverage for a company and print the report as JSON.
    Analyze {
        /// Company name to search coverage for.
        company: String,
        /// Fetch live articles instead of the generated catalog.
        #[arg(long)]
        live: bool,
        /// Write the spoken summary MP3 to this path.
        #[arg(long)]
        audio_out: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct Report {
    company: String,
    articles: Vec<ClassifiedArticle>,
    comparative_sentiment: AggregationResult,
    final_sentiment: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            company,
            live,
            audio_out,
        } => analyze(&company, live, audio_out).await,
    }
}

async fn analyze(company: &str, live: bool, audio_out: Option<PathBuf>) -> anyhow::Result<()> {
    let config = newslens_core::load_app_config_from_env()?;

    let news = newslens_news::NewsClient::new(
        config.news_request_timeout_secs,
        &config.news_user_agent,
    )?;
    let use_mock = !live && config.news_use_mock;
    let articles =
        newslens_news::acquire_articles(&news, company, config.news_max_articles, use_mock).await?;

    let classified: Vec<ClassifiedArticle> = articles
        .into_iter()
        .map(|a| ClassifiedArticle::classify(a, config.num_topics))
        .collect();

    let options = AggregationOptions {
        comparison_window: config.comparison_window,
        max_coverage_differences: config.max_coverage_differences,
    };
    let comparative_sentiment = aggregate(&classified, &options);
    let final_sentiment = compose_verdict(company, &comparative_sentiment.sentiment_distribution);

    if let Some(path) = audio_out {
        let speech = newslens_speech::SpeechClient::new(&config.tts_base_url, &config.tts_lang)?;
        let summary_text = spoken_summary(company, &final_sentiment);
        match speech.synthesize(&summary_text).await {
            Ok(bytes) => {
                tokio::fs::write(&path, bytes).await?;
                tracing::info!(path = %path.display(), "spoken summary written");
            }
            Err(e) => {
                tracing::warn!(error = %e, "speech synthesis failed; skipping audio output");
            }
        }
    }

    let report = Report {
        company: company.to_string(),
        articles: classified,
        comparative_sentiment,
        final_sentiment,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
