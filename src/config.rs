use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback server when no config file exists and none was ever written —
/// the same default the options form falls back to.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Indexing server base URL. Stored without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bound timeout for index submissions, so a stalled server cannot
    /// wedge the pipeline.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Timeout for answer retrieval. The server holds the request open for
    /// up to 30s while the answer is computed, so this must exceed that.
    #[serde(default = "default_answer_timeout_secs")]
    pub answer_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            answer_timeout_secs: default_answer_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SERVER.to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_answer_timeout_secs() -> u64 {
    45
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: the extension runs on defaults until
/// the user saves a server URL, and so does the CLI.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate_base_url(&config.server.base_url)?;
    config.server.base_url = normalize_base_url(&config.server.base_url);

    if config.server.timeout_secs == 0 {
        anyhow::bail!("server.timeout_secs must be > 0");
    }
    if config.server.answer_timeout_secs == 0 {
        anyhow::bail!("server.answer_timeout_secs must be > 0");
    }

    Ok(config)
}

/// Write the server base URL back to the config file, preserving the rest
/// of the settings. This is the single write contract the settings store
/// exposes.
pub fn set_server(path: &Path, base_url: &str) -> Result<()> {
    validate_base_url(base_url)?;

    let mut config = load_config(path)?;
    config.server.base_url = normalize_base_url(base_url);

    let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = url::Url::parse(base_url)
        .with_context(|| format!("server.base_url is not a valid URL: '{}'", base_url))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => anyhow::bail!(
            "server.base_url must be http or https, got '{}://'",
            other
        ),
    }

    Ok(())
}

/// Endpoint paths are joined by plain concatenation, so a trailing slash
/// on the base would produce `//index`; trim it once here.
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("courier.toml")).unwrap();
        assert_eq!(config.server.base_url, DEFAULT_SERVER);
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.server.answer_timeout_secs, 45);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://10.0.0.5:9999\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.base_url, "http://10.0.0.5:9999");
        assert_eq!(config.server.timeout_secs, 10);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://h:8080/\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.base_url, "http://h:8080");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(&path, "[server]\nbase_url = \"not a url\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(&path, "[server]\nbase_url = \"ftp://h:21\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://h:8080\"\ntimeout_secs = 0\n",
        )
        .unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_set_server_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config").join("courier.toml");
        set_server(&path, "http://192.168.1.20:8080/").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.base_url, "http://192.168.1.20:8080");
    }

    #[test]
    fn test_set_server_preserves_timeouts() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        std::fs::write(
            &path,
            "[server]\nbase_url = \"http://h:8080\"\ntimeout_secs = 3\n",
        )
        .unwrap();
        set_server(&path, "http://other:8080").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.base_url, "http://other:8080");
        assert_eq!(config.server.timeout_secs, 3);
    }

    #[test]
    fn test_set_server_rejects_invalid_url() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("courier.toml");
        assert!(set_server(&path, "nope").is_err());
        assert!(!path.exists());
    }
}
