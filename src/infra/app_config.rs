use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8145";
const GENERATE_PATH: &str = "/api/email/generate";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the generation service.
    pub service_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn generate_endpoint(&self) -> String {
        format!("{}{}", self.service_url.trim_end_matches('/'), GENERATE_PATH)
    }
}

pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring unreadable config at {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to encode config")?;
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("REPLYDESK_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("REPLYDESK_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("replydesk");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("replydesk");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("replydesk");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("replydesk");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".replydesk")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AppConfig {
            service_url: "http://example.test:9000/".into(),
        };
        assert_eq!(
            config.generate_endpoint(),
            "http://example.test:9000/api/email/generate"
        );
        assert_eq!(
            AppConfig::default().generate_endpoint(),
            "http://localhost:8145/api/email/generate"
        );
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            service_url: "http://example.test:9000".into(),
        };

        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from(&path).service_url, "http://example.test:9000");
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = save_config_to(&blocker.join("config.toml"), &AppConfig::default());

        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
    }
}
