//! Configuration and file management for proofline
//!
//! This crate provides:
//! - The cache directory used for log files
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, SERVICE_URL_ENV};
pub use config_file::{find_config_file, ConfigFile, CONFIG_FILE_NAME};
pub use paths::cache_dir;
