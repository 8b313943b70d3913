//! Kumbu configuration.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;
use url::Url;

use crate::error::{KumbuError, KumbuResult};

static DEFAULT_CHECK_INTERVAL: &str = "1h";

fn default_check_interval() -> String {
    DEFAULT_CHECK_INTERVAL.to_string()
}

/// Configuration at ~/.config/kumbu/config.toml
///
/// Everything the daemon needs is explicit here; there are no ambient
/// endpoints or identities.
#[derive(Deserialize, Clone)]
pub struct KumbuConfig {
    /// Base URL of the cloud API, e.g. `https://cloud.example.com/api`.
    pub api_base: Url,

    /// The user whose events are watched.
    pub user_id: i64,

    /// Bearer token for the API. Falls back to the `KUMBU_TOKEN`
    /// environment variable when absent.
    #[serde(default)]
    pub token: Option<String>,

    /// How often reminders are re-evaluated (humantime format, e.g. "1h").
    #[serde(default = "default_check_interval")]
    pub check_interval: String,
}

impl KumbuConfig {
    pub fn config_path() -> KumbuResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KumbuError::Config("Could not determine config directory".into()))?
            .join("kumbu");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration, creating a commented template on first run.
    pub fn load() -> KumbuResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Err(KumbuError::Config(format!(
                "No configuration found. A template was written to {}; fill in api_base and user_id",
                config_path.display()
            )));
        }

        let mut config: KumbuConfig = Config::builder()
            .add_source(File::from(config_path))
            .build()
            .map_err(|e| KumbuError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| KumbuError::Config(e.to_string()))?;

        if config.token.is_none() {
            config.token = std::env::var("KUMBU_TOKEN").ok();
        }

        Ok(config)
    }

    /// Parsed check interval.
    pub fn interval(&self) -> KumbuResult<Duration> {
        humantime::parse_duration(&self.check_interval).map_err(|e| {
            KumbuError::Config(format!(
                "Invalid check_interval '{}': {}",
                self.check_interval, e
            ))
        })
    }

    /// Create a default config file with the required options spelled out.
    pub fn create_default_config(path: &std::path::Path) -> KumbuResult<()> {
        let contents = format!(
            "\
# kumbu configuration

# Base URL of your cloud API:
# api_base = \"https://cloud.example.com/api\"

# Whose events to watch:
# user_id = 1

# API token (or set the KUMBU_TOKEN environment variable):
# token = \"...\"

# How often to re-evaluate reminders:
# check_interval = \"{DEFAULT_CHECK_INTERVAL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| KumbuError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| KumbuError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(check_interval: &str) -> KumbuConfig {
        KumbuConfig {
            api_base: Url::parse("https://cloud.example.com/api").unwrap(),
            user_id: 1,
            token: None,
            check_interval: check_interval.to_string(),
        }
    }

    #[test]
    fn test_interval_parses_humantime() {
        assert_eq!(config("1h").interval().unwrap(), Duration::from_secs(3600));
        assert_eq!(config("30m").interval().unwrap(), Duration::from_secs(1800));
    }

    #[test]
    fn test_invalid_interval_is_a_config_error() {
        assert!(matches!(
            config("soonish").interval(),
            Err(KumbuError::Config(_))
        ));
    }
}
