//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root of the REST API (no trailing slash needed)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent sent by the native HTTP transport
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout for the native HTTP transport
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Extra location names offered next to the fetched ones
    #[serde(default)]
    pub custom_locations: Vec<String>,

    /// Where the TUI writes its tracing output
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.into()
}
fn default_user_agent() -> String {
    format!("rickdex/{}", env!("CARGO_PKG_VERSION"))
}
fn default_request_timeout() -> u64 {
    15
}
fn default_log_file() -> PathBuf {
    PathBuf::from("rickdex-tui.log")
}

impl Config {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: Config =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.yaml` from `dir` if it exists, defaults (plus env) otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let config_path = dir.join("config.yaml");
        if config_path.exists() {
            return Self::load(&config_path);
        }
        let mut config = Config::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("RICKDEX_API_URL") {
            self.api_base_url = url;
        }
        if let Ok(secs) = std::env::var("RICKDEX_TIMEOUT") {
            self.request_timeout_seconds = secs
                .parse()
                .with_context(|| format!("RICKDEX_TIMEOUT is not a number: {secs}"))?;
        }
        if let Ok(path) = std::env::var("RICKDEX_LOG_FILE") {
            self.log_file = PathBuf::from(path);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
            request_timeout_seconds: default_request_timeout(),
            custom_locations: Vec::new(),
            log_file: default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "custom_locations: []").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.request_timeout_seconds, 15);
        assert!(config.custom_locations.is_empty());
        assert!(config.user_agent.starts_with("rickdex/"));
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "api_base_url: http://localhost:8080/api\ncustom_locations:\n  - Purge Planet\n  - Gazorpazorp"
        )
        .unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.custom_locations, vec!["Purge Planet", "Gazorpazorp"]);
    }

    #[test]
    fn test_non_http_base_url_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "api_base_url: ftp://example.com").unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.log_file, PathBuf::from("rickdex-tui.log"));
    }
}
