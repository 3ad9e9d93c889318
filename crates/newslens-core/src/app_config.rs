use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub news_request_timeout_secs: u64,
    pub news_user_agent: String,
    pub news_max_articles: usize,
    pub news_use_mock: bool,
    pub tts_base_url: String,
    pub tts_lang: String,
    pub num_topics: usize,
    pub comparison_window: usize,
    pub max_coverage_differences: usize,
}
