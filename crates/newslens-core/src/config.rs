use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got \"{other}\""),
            }),
        }
    };

    let env = parse_environment(&or_default("NEWSLENS_ENV", "development"));

    let bind_addr = parse_addr("NEWSLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NEWSLENS_LOG_LEVEL", "info");

    let news_request_timeout_secs = parse_u64("NEWSLENS_NEWS_REQUEST_TIMEOUT_SECS", "10")?;
    let news_user_agent = or_default("NEWSLENS_NEWS_USER_AGENT", "newslens/0.1 (news-analysis)");
    let news_max_articles = parse_usize("NEWSLENS_NEWS_MAX_ARTICLES", "10")?;
    let news_use_mock = parse_bool("NEWSLENS_NEWS_USE_MOCK", "true")?;

    let tts_base_url = or_default(
        "NEWSLENS_TTS_BASE_URL",
        "https://translate.google.com/translate_tts",
    );
    let tts_lang = or_default("NEWSLENS_TTS_LANG", "hi");

    let num_topics = parse_usize("NEWSLENS_NUM_TOPICS", "3")?;
    let comparison_window = parse_usize("NEWSLENS_COMPARISON_WINDOW", "2")?;
    let max_coverage_differences = parse_usize("NEWSLENS_MAX_COVERAGE_DIFFERENCES", "5")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        news_request_timeout_secs,
        news_user_agent,
        news_max_articles,
        news_use_mock,
        tts_base_url,
        tts_lang,
        num_topics,
        comparison_window,
        max_coverage_differences,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("all keys have defaults");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.news_request_timeout_secs, 10);
        assert_eq!(cfg.news_max_articles, 10);
        assert!(cfg.news_use_mock);
        assert_eq!(cfg.tts_lang, "hi");
        assert_eq!(cfg.num_topics, 3);
        assert_eq!(cfg.comparison_window, 2);
        assert_eq!(cfg.max_coverage_differences, 5);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NEWSLENS_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSLENS_BIND_ADDR"),
            "expected InvalidEnvVar(NEWSLENS_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_parses_use_mock_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NEWSLENS_NEWS_USE_MOCK", "false");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.news_use_mock);
    }

    #[test]
    fn build_app_config_rejects_bad_bool() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NEWSLENS_NEWS_USE_MOCK", "maybe");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSLENS_NEWS_USE_MOCK"),
            "expected InvalidEnvVar(NEWSLENS_NEWS_USE_MOCK), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_parses_comparison_window_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NEWSLENS_COMPARISON_WINDOW", "4");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.comparison_window, 4);
    }

    #[test]
    fn build_app_config_rejects_bad_num_topics() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("NEWSLENS_NUM_TOPICS", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSLENS_NUM_TOPICS"),
            "expected InvalidEnvVar(NEWSLENS_NUM_TOPICS), got: {result:?}"
        );
    }
}
