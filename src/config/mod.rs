//! Configuration management for nowpage.
//!
//! Configuration is read from `~/.config/nowpage/config.toml` (or the path
//! given with `--config`) and then overlaid with environment variables, so a
//! CI build can inject identifiers without a file. The resulting [`Config`]
//! is passed down explicitly; nothing below `main` reads the environment.

pub mod sources;

pub use sources::{GithubConfig, GoodreadsConfig, HttpConfig, LetterboxdConfig};

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ENV_LETTERBOXD_USERNAME: &str = "LETTERBOXD_USERNAME";
pub const ENV_GOODREADS_USER_ID: &str = "GOODREADS_USER_ID";
pub const ENV_GITHUB_USERNAME: &str = "GITHUB_USERNAME";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub letterboxd: LetterboxdConfig,
    pub goodreads: GoodreadsConfig,
    pub github: GithubConfig,
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing file is not an error: every source simply starts unset.
    /// A file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })
    }

    /// Overlay values from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`. Blank values are ignored so an empty
    /// variable in CI cannot clobber a value from the file.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_LETTERBOXD_USERNAME) {
            self.letterboxd.username = Some(v);
        }
        if let Some(v) = get(ENV_GOODREADS_USER_ID) {
            self.goodreads.user_id = Some(v);
        }
        if let Some(v) = get(ENV_GITHUB_USERNAME) {
            self.github.username = Some(v);
        }
        if let Some(v) = get(ENV_GITHUB_TOKEN) {
            self.github.token = Some(v);
        }
        self
    }

    /// Get the default config file path: `~/.config/nowpage/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("nowpage").join("config.toml"))
    }

    /// Write the commented default config to `path`.
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    pub fn default_config_content() -> &'static str {
        r##"# nowpage configuration
#
# Each source is independent: leave its identifier unset and that section
# of the page shows "Nothing recent" while the others still load.
#
# Environment variables override this file:
#   LETTERBOXD_USERNAME, GOODREADS_USER_ID, GITHUB_USERNAME, GITHUB_TOKEN

[letterboxd]
# username = "your-letterboxd-name"

[goodreads]
# Numeric id from https://www.goodreads.com/user/show/<id>
# user_id = "12345678"

[github]
# username = "your-github-login"
# Optional, only raises the API rate limit
# token = "ghp_..."

[http]
# Per-request timeout in seconds. Unset waits as long as the upstream takes.
# timeout_secs = 30
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Config file already exists at {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(Config::default_config_content())
            .expect("Default config should be valid TOML");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
[github]
username = "moosh3"
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.github.username.as_deref(), Some("moosh3"));
        assert_eq!(config.github.token, None);
        assert_eq!(config.letterboxd.username, None);
        assert_eq!(config.http.timeout_secs, None);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            (ENV_LETTERBOXD_USERNAME, "film-fan"),
            (ENV_GITHUB_TOKEN, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.letterboxd.username = Some("from-file".into());
        config.goodreads.user_id = Some("42".into());

        let config = config.with_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.letterboxd.username.as_deref(), Some("film-fan"));
        assert_eq!(config.goodreads.user_id.as_deref(), Some("42"));
        assert_eq!(config.github.token.as_deref(), Some("secret"));
        assert_eq!(config.github.username, None);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = Config::default();
        config.github.username = Some("moosh3".into());

        let config = config.with_overrides(|k| (k == ENV_GITHUB_USERNAME).then(|| "  ".to_string()));

        assert_eq!(config.github.username.as_deref(), Some("moosh3"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[github\nusername = 1").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::write_default(&path, false).unwrap();
        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());

        let err = Config::write_default(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
        Config::write_default(&path, true).unwrap();
    }
}
