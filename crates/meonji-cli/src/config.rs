use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_URL: &str = "meonji.cafe24app.com";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MEONJI_CONFIG environment variable (with tilde expansion)
/// 3. <config dir>/meonji/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MEONJI_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("meonji").join("config.toml"))
        .ok_or_else(|| anyhow!("Could not determine config path: no config directory found"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Public address of the service, shown in usage examples
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Config {
    /// Load the config at `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `MEONJI_URL` over the file's value.
    pub fn with_env_overrides(self) -> Self {
        self.with_url_override(std::env::var("MEONJI_URL").ok())
    }

    fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        assert_eq!(Config::default().url, "meonji.cafe24app.com");
    }

    #[test]
    fn test_config_load_url() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "url = \"air.example.com\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.url, "air.example.com");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_missing_url_key_uses_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "# nothing here\n")?;

        assert_eq!(Config::load_from(&config_path)?.url, DEFAULT_URL);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "url = [")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_url_override() {
        let config = Config::default().with_url_override(Some("localhost:8080".to_string()));
        assert_eq!(config.url, "localhost:8080");

        let config = Config::default().with_url_override(Some("  ".to_string()));
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/meonji.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/meonji.toml"));
        Ok(())
    }
}
