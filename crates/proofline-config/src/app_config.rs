//! Application configuration
//!
//! Configuration loaded from .proofline.toml, with an environment override
//! for the service URL.

use proofline_diff::{AlignMode, TrailingPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding `service_url`
pub const SERVICE_URL_ENV: &str = "PROOFLINE_SERVICE_URL";

/// Application configuration loaded from .proofline.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the correction service
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Quiet period after the last keystroke before live correction fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Timeout for a single service request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Diff strategy for the highlighted output
    #[serde(default)]
    pub align_mode: AlignMode,

    /// What the greedy diff does with leftover original tokens
    #[serde(default)]
    pub trailing_tokens: TrailingPolicy,

    /// Where downloads and exported reports are written
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

fn default_service_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            align_mode: AlignMode::default(),
            trailing_tokens: TrailingPolicy::default(),
            download_dir: default_download_dir(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    /// `PROOFLINE_SERVICE_URL` wins over the file.
    pub fn load() -> Self {
        let mut config = Self::from_file_or_default();
        config.apply_env_override(std::env::var(SERVICE_URL_ENV).ok());
        config
    }

    fn from_file_or_default() -> Self {
        if let Some(file) = crate::find_config_file() {
            match toml::from_str(&file.content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", file.path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", file.path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    fn apply_env_override(&mut self, service_url: Option<String>) {
        if let Some(url) = service_url.filter(|url| !url.trim().is_empty()) {
            log::info!("Service URL overridden by {}: {}", SERVICE_URL_ENV, url);
            self.service_url = url;
        }
    }

    /// Debounce interval as a `Duration`
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service_url, "http://127.0.0.1:5000");
        assert_eq!(config.debounce(), Duration::from_millis(500));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.align_mode, AlignMode::Greedy);
        assert_eq!(config.trailing_tokens, TrailingPolicy::Drop);
        assert_eq!(config.download_dir, PathBuf::from("."));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            service_url = "http://spell.local:8080"
            debounce_ms = 250
            align_mode = "minimal"
            trailing_tokens = "emit"
            download_dir = "/tmp/out"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.service_url, "http://spell.local:8080");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.align_mode, AlignMode::Minimal);
        assert_eq!(config.trailing_tokens, TrailingPolicy::Emit);
        assert_eq!(config.download_dir, PathBuf::from("/tmp/out"));
        // request_timeout_secs should use default
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str(r#"debounce_ms = 1000"#).unwrap();
        assert_eq!(config.debounce_ms, 1000);
        assert_eq!(config.service_url, "http://127.0.0.1:5000");
        assert_eq!(config.align_mode, AlignMode::Greedy);
    }

    #[test]
    fn test_env_override() {
        let mut config = AppConfig::default();
        config.apply_env_override(Some("http://other:9000".to_string()));
        assert_eq!(config.service_url, "http://other:9000");

        config.apply_env_override(Some("   ".to_string()));
        assert_eq!(config.service_url, "http://other:9000");

        config.apply_env_override(None);
        assert_eq!(config.service_url, "http://other:9000");
    }
}
