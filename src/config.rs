use serde::Deserialize;
use std::time::Duration;

use crate::services::discovery::DiscoverySettings;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image CDN base URL (size segment is appended per image kind)
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Language passed to every TMDB request
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Upper bound for a single catalog request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Quiet period before free-text search fires
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Minimum characters before free text counts as a search
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_min_query_chars() -> usize {
    2
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Coordinator tuning derived from this configuration
    pub fn discovery_settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            debounce: Duration::from_millis(self.search_debounce_ms),
            min_query_chars: self.min_query_chars,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let vars = vec![("TMDB_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.tmdb_api_key, "secret");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb_language, "en-US");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");

        let settings = config.discovery_settings();
        assert_eq!(settings.debounce, Duration::from_millis(500));
        assert_eq!(settings.min_query_chars, 2);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let vars: Vec<(String, String)> = vec![("PORT".to_string(), "8080".to_string())];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let vars = vec![
            ("TMDB_API_KEY".to_string(), "k".to_string()),
            ("SEARCH_DEBOUNCE_MS".to_string(), "250".to_string()),
            ("MIN_QUERY_CHARS".to_string(), "3".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "4".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.request_timeout(), Duration::from_secs(4));
        assert_eq!(
            config.discovery_settings().debounce,
            Duration::from_millis(250)
        );
        assert_eq!(config.discovery_settings().min_query_chars, 3);
    }
}
