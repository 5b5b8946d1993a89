//! Configuration management
//!
//! This module handles loading and parsing configuration for the site.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults; the remote
//! store endpoint and access key fall back to hardcoded defaults so a
//! fresh checkout runs against the hosted project without any setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Upload configuration
    #[serde(default)]
    pub upload: UploadConfig,
    /// Admin panel configuration
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Remote store configuration
///
/// The hosted backend exposes two record collections ("gallery" and
/// "enquiries") through a PostgREST-style HTTP interface plus an object
/// bucket for images. The `memory` driver keeps everything in-process and
/// writes uploads to the local upload directory instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store driver (rest or memory)
    #[serde(default)]
    pub driver: StoreDriver,
    /// Remote endpoint base URL
    #[serde(default = "default_store_url")]
    pub url: String,
    /// Access key sent with every request
    #[serde(default = "default_store_key")]
    pub key: String,
    /// Gallery table name
    #[serde(default = "default_gallery_table")]
    pub gallery_table: String,
    /// Enquiries table name
    #[serde(default = "default_enquiries_table")]
    pub enquiries_table: String,
    /// Object bucket for uploaded images
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            driver: StoreDriver::default(),
            url: default_store_url(),
            key: default_store_key(),
            gallery_table: default_gallery_table(),
            enquiries_table: default_enquiries_table(),
            bucket: default_bucket(),
        }
    }
}

fn default_store_url() -> String {
    "https://fxwryouedphlotunmzbq.supabase.co".to_string()
}

fn default_store_key() -> String {
    concat!(
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
        "eyJpc3MiOiJzdXBhYmFzZSIsInJlZiI6ImZ4d3J5b3VlZHBobG90dW5temJxIiwicm9sZSI6ImFub24iLCJpYXQiOjE3NjYyMjc3MzAsImV4cCI6MjA4MTgwMzczMH0.",
        "vCIQKGCmIi6NsH4XG6H-oWwXi1oOW3ypDYutIokd1-A"
    )
    .to_string()
}

fn default_gallery_table() -> String {
    "gallery".to_string()
}

fn default_enquiries_table() -> String {
    "enquiries".to_string()
}

fn default_bucket() -> String {
    "gallery-images".to_string()
}

/// Store driver type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreDriver {
    /// Remote PostgREST-style store (default)
    #[default]
    Rest,
    /// In-process store with local uploads
    Memory,
}

/// Upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Local upload directory (memory driver only)
    #[serde(default = "default_upload_path")]
    pub path: PathBuf,
    /// Maximum file size in bytes (default: 10MB)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Allowed image MIME types
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            path: default_upload_path(),
            max_file_size: default_max_file_size(),
            allowed_types: default_allowed_types(),
        }
    }
}

fn default_upload_path() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024 // 10MB
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/gif".to_string(),
        "image/webp".to_string(),
    ]
}

impl UploadConfig {
    /// Check if a MIME type is allowed
    pub fn is_type_allowed(&self, mime_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == mime_type)
    }
}

/// Admin panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared panel password, compared as plain text. This gate keeps the
    /// panel out of casual reach; it is not an access-control mechanism.
    #[serde(default = "default_admin_password")]
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_admin_password(),
        }
    }
}

fn default_admin_password() -> String {
    "sneha123".to_string()
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default
    /// configuration. If the file exists but is invalid YAML, returns an
    /// error with location details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - SNEHA_SERVER_HOST
    /// - SNEHA_SERVER_PORT
    /// - SNEHA_STORE_DRIVER
    /// - SNEHA_STORE_URL
    /// - SNEHA_STORE_KEY
    /// - SNEHA_UPLOAD_PATH
    /// - SNEHA_ADMIN_PASSWORD
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SNEHA_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SNEHA_SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }

        if let Ok(driver) = std::env::var("SNEHA_STORE_DRIVER") {
            match driver.to_lowercase().as_str() {
                "rest" => self.store.driver = StoreDriver::Rest,
                "memory" => self.store.driver = StoreDriver::Memory,
                _ => {} // Ignore invalid values
            }
        }
        if let Ok(url) = std::env::var("SNEHA_STORE_URL") {
            self.store.url = url;
        }
        if let Ok(key) = std::env::var("SNEHA_STORE_KEY") {
            self.store.key = key;
        }

        if let Ok(path) = std::env::var("SNEHA_UPLOAD_PATH") {
            self.upload.path = PathBuf::from(path);
        }

        if let Ok(password) = std::env::var("SNEHA_ADMIN_PASSWORD") {
            self.admin.password = password;
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load(std::path::Path::new("does-not-exist.yml")).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.driver, StoreDriver::Rest);
        assert_eq!(config.store.gallery_table, "gallery");
        assert_eq!(config.store.enquiries_table, "enquiries");
        assert_eq!(config.admin.password, "sneha123");
    }

    #[test]
    fn test_hardcoded_remote_fallbacks_present() {
        let config = Config::default();
        assert!(config.store.url.starts_with("https://"));
        assert!(!config.store.key.is_empty());
        assert_eq!(config.store.bucket, "gallery-images");
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 3000\nstore:\n  driver: memory").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.driver, StoreDriver::Memory);
        // untouched sections keep their defaults
        assert_eq!(config.upload.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_load_empty_file_returns_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_yaml_reports_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: [unclosed").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_env_overrides_win() {
        let _guard = CONFIG_ENV_MUTEX.lock().unwrap();
        std::env::set_var("SNEHA_STORE_URL", "https://example.test");
        std::env::set_var("SNEHA_STORE_KEY", "test-key");
        std::env::set_var("SNEHA_ADMIN_PASSWORD", "letmein");

        let config = Config::load_with_env(std::path::Path::new("does-not-exist.yml")).unwrap();
        assert_eq!(config.store.url, "https://example.test");
        assert_eq!(config.store.key, "test-key");
        assert_eq!(config.admin.password, "letmein");

        std::env::remove_var("SNEHA_STORE_URL");
        std::env::remove_var("SNEHA_STORE_KEY");
        std::env::remove_var("SNEHA_ADMIN_PASSWORD");
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let _guard = CONFIG_ENV_MUTEX.lock().unwrap();
        std::env::set_var("SNEHA_SERVER_PORT", "not-a-port");
        std::env::set_var("SNEHA_STORE_DRIVER", "carrier-pigeon");

        let config = Config::load_with_env(std::path::Path::new("does-not-exist.yml")).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.driver, StoreDriver::Rest);

        std::env::remove_var("SNEHA_SERVER_PORT");
        std::env::remove_var("SNEHA_STORE_DRIVER");
    }

    #[test]
    fn test_upload_type_allowed() {
        let config = UploadConfig::default();
        assert!(config.is_type_allowed("image/jpeg"));
        assert!(config.is_type_allowed("image/webp"));
        assert!(!config.is_type_allowed("application/pdf"));
    }
}
