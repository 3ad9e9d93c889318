//! Shared types and configuration for newslens.

pub mod app_config;
pub mod article;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use article::{summarize, Article, SUMMARY_MAX_CHARS};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
