//! Configuration handling for the form assistant

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Storage key the saved form state lives under
pub const DEFAULT_STORAGE_KEY: &str = "carbonFormData";

/// User configuration, every field optional
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FormConfig {
    /// Storage key for the saved form state
    pub storage_key: Option<String>,
    /// Delay before saved values are restored on load
    pub restore_delay_ms: Option<u64>,
    /// Lifetime of a notification
    pub notification_timeout_ms: Option<u64>,
    /// Tooltip fade in/out duration
    pub tooltip_fade_ms: Option<u64>,
    /// Directory for saved form state (defaults to the platform data dir)
    pub storage_dir: Option<PathBuf>,
}

/// Timer durations the assistant runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub restore_delay: Duration,
    pub notification_timeout: Duration,
    pub tooltip_fade: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            restore_delay: Duration::from_millis(100),
            notification_timeout: Duration::from_millis(5000),
            tooltip_fade: Duration::from_millis(300),
        }
    }
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "carbonform", "carbon-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults when the file is missing
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Storage key with the default applied
    pub fn storage_key(&self) -> String {
        self.storage_key
            .clone()
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string())
    }

    /// Directory holding saved state and the log file
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }

    /// Timer durations with defaults applied
    pub fn timings(&self) -> Timings {
        let defaults = Timings::default();
        Timings {
            restore_delay: self
                .restore_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.restore_delay),
            notification_timeout: self
                .notification_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_timeout),
            tooltip_fade: self
                .tooltip_fade_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.tooltip_fade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.storage_key.is_none());
        assert!(config.restore_delay_ms.is_none());
        assert!(config.notification_timeout_ms.is_none());
        assert!(config.tooltip_fade_ms.is_none());
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let config = FormConfig::default();
        assert_eq!(config.storage_key(), "carbonFormData");
        assert_eq!(config.timings(), Timings::default());
        assert_eq!(
            config.timings().notification_timeout,
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn test_partial_overrides() {
        let json = r#"{"tooltip_fade_ms": 150, "storage_key": "other"}"#;
        let config: FormConfig = serde_json::from_str(json).unwrap();
        let timings = config.timings();

        assert_eq!(config.storage_key(), "other");
        assert_eq!(timings.tooltip_fade, Duration::from_millis(150));
        assert_eq!(timings.restore_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"restore_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.restore_delay_ms, Some(10));
    }

    #[test]
    fn test_storage_dir_override_wins() {
        let config = FormConfig {
            storage_dir: Some(PathBuf::from("/srv/forms")),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), Some(PathBuf::from("/srv/forms")));
    }

    mod load_from {
        use super::*;

        fn scratch_file(contents: Option<&str>) -> PathBuf {
            let dir = std::env::temp_dir()
                .join(format!("carbon-form-config-{}", uuid::Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            let path = dir.join("config.json");
            if let Some(contents) = contents {
                fs::write(&path, contents).unwrap();
            }
            path
        }

        #[test]
        fn test_missing_file_gives_defaults() {
            let config = FormConfig::load_from(&scratch_file(None)).unwrap();
            assert!(config.storage_key.is_none());
            assert_eq!(config.timings(), Timings::default());
        }

        #[test]
        fn test_reads_existing_file() {
            let path = scratch_file(Some(r#"{"notification_timeout_ms": 2500}"#));
            let config = FormConfig::load_from(&path).unwrap();
            assert_eq!(
                config.timings().notification_timeout,
                Duration::from_millis(2500)
            );
        }

        #[test]
        fn test_malformed_file_is_an_error() {
            let path = scratch_file(Some("{oops"));
            let err = FormConfig::load_from(&path).unwrap_err();
            assert!(err.to_string().starts_with("parsing "));
        }
    }
}
