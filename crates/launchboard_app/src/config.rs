//! Application configuration loaded from an optional RON file.
//!
//! Without `--config`, `./launchboard.ron` is read if it exists; otherwise
//! the defaults below apply. Command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use launchboard_core::DEFAULT_ENDPOINT;
use launchboard_engine::FetchSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

const CONFIG_FILENAME: &str = "launchboard.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Launches endpoint; filter segments are appended after `?`.
    pub endpoint: String,
    /// Default page location; `-` writes to stdout.
    pub output: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output: PathBuf::from("results.html"),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            redirect_limit: fetch.redirect_limit,
            max_bytes: fetch.max_bytes,
            log_destination: LogDestination::Terminal,
        }
    }
}

impl AppConfig {
    /// The file to read: `explicit` if given (it must exist), else the default file if present.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let path = Path::new(CONFIG_FILENAME);
                path.exists().then(|| path.to_path_buf())
            }
        }
    }

    /// Reads `source`, or returns the defaults when there is none.
    ///
    /// Runs before logging is initialized, so it does not log.
    pub fn load(source: Option<&Path>) -> Result<Self, ConfigError> {
        match source {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            redirect_limit: self.redirect_limit,
            max_bytes: self.max_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_fetch_settings() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "https://api.spacexdata.com/v3/launches");
        let settings = config.fetch_settings();
        let defaults = FetchSettings::default();
        assert_eq!(settings.connect_timeout, defaults.connect_timeout);
        assert_eq!(settings.request_timeout, defaults.request_timeout);
        assert_eq!(settings.max_bytes, defaults.max_bytes);
        assert_eq!(settings.redirect_limit, defaults.redirect_limit);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("launchboard.ron");
        fs::write(
            &path,
            r#"(
                endpoint: "http://localhost:8080/v3/launches",
                request_timeout_secs: 5,
                log_destination: Both,
            )"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/v3/launches");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.output, PathBuf::from("results.html"));
        assert_eq!(config.fetch_settings().request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn round_trips_through_ron() {
        let config = AppConfig {
            output: PathBuf::from("-"),
            ..AppConfig::default()
        };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let parsed: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn explicit_path_is_located_even_if_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.ron");
        assert_eq!(AppConfig::locate(Some(missing.as_path())), Some(missing.clone()));
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.ron");
        let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(endpoint: 42").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
