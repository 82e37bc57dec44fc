use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "recall";
const CONFIG_FILE_NAME: &str = "config.json";
const SESSIONS_FILE_NAME: &str = "sessions.json";
const SESSIONS_PATH_ENV: &str = "RECALL_SESSIONS_PATH";

/// Minimum window width at which the panel is docked instead of toggled.
pub(crate) const DEFAULT_WIDE_LAYOUT_MIN_WIDTH: f32 = 1024.0;

/// Errors emitted while loading the app configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw config file contents; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    sessions_path: Option<PathBuf>,
    wide_layout_min_width: Option<f32>,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) sessions_path: PathBuf,
    pub(crate) wide_layout_min_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sessions_path: config_dir().join(SESSIONS_FILE_NAME),
            wide_layout_min_width: DEFAULT_WIDE_LAYOUT_MIN_WIDTH,
        }
    }
}

impl AppConfig {
    /// Load config from the user config dir, falling back to defaults.
    pub(crate) fn load() -> Self {
        let path = config_dir().join(CONFIG_FILE_NAME);
        let env_sessions_path =
            std::env::var_os(SESSIONS_PATH_ENV).map(PathBuf::from);

        match read_config_file(&path) {
            Ok(file) => Self::resolve(file, env_sessions_path),
            Err(err) => {
                log::warn!(
                    "failed to load config from {}, using defaults: {err}",
                    path.display()
                );
                Self::resolve(ConfigFile::default(), env_sessions_path)
            },
        }
    }

    fn resolve(file: ConfigFile, env_sessions_path: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        let sessions_path = env_sessions_path
            .or(file.sessions_path)
            .unwrap_or(defaults.sessions_path);
        let wide_layout_min_width = file
            .wide_layout_min_width
            .filter(|width| width.is_finite() && *width > 0.0)
            .unwrap_or(defaults.wide_layout_min_width);

        Self {
            sessions_path,
            wide_layout_min_width,
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigFile::default());
        },
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

/// Return the directory holding Recall's config and data files.
fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(CONFIG_DIR_NAME);
    }
    std::env::temp_dir().join(CONFIG_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_file_when_resolved_then_defaults_apply() {
        let config = AppConfig::resolve(ConfigFile::default(), None);

        assert_eq!(config, AppConfig::default());
        assert!(config.sessions_path.ends_with("recall/sessions.json"));
    }

    #[test]
    fn given_env_and_file_paths_when_resolved_then_env_wins() {
        let file = ConfigFile {
            sessions_path: Some(PathBuf::from("/from/file.json")),
            wide_layout_min_width: Some(900.0),
        };

        let config =
            AppConfig::resolve(file, Some(PathBuf::from("/from/env.json")));

        assert_eq!(config.sessions_path, PathBuf::from("/from/env.json"));
        assert_eq!(config.wide_layout_min_width, 900.0);
    }

    #[test]
    fn given_invalid_breakpoint_when_resolved_then_default_is_kept() {
        let file = ConfigFile {
            sessions_path: None,
            wide_layout_min_width: Some(-1.0),
        };

        let config = AppConfig::resolve(file, None);

        assert_eq!(config.wide_layout_min_width, DEFAULT_WIDE_LAYOUT_MIN_WIDTH);
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_are_none() {
        let file: ConfigFile =
            serde_json::from_str(r#"{ "wide_layout_min_width": 1200 }"#)
                .expect("config should parse");

        assert!(file.sessions_path.is_none());
        assert_eq!(file.wide_layout_min_width, Some(1200.0));
    }
}
