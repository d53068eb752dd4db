//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/yongyong/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/yongyong/` (~/.config/yongyong/)
//! - State/Logs: `$XDG_STATE_HOME/yongyong/` (~/.local/state/yongyong/)

use crate::agent::Persona;
use crate::chat::ReplyDelay;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Agent persona and simulated latency
    #[serde(default)]
    pub agent: AgentConfig,

    /// Catalog fixture override
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Terminal layout preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

/// Agent responder configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Which built-in persona answers on behalf of creators
    #[serde(default)]
    pub persona: Persona,

    /// Lower bound of the simulated reply delay
    #[serde(default = "default_reply_delay_min")]
    pub reply_delay_min_ms: u64,

    /// Upper bound of the simulated reply delay
    #[serde(default = "default_reply_delay_max")]
    pub reply_delay_max_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            persona: Persona::default(),
            reply_delay_min_ms: default_reply_delay_min(),
            reply_delay_max_ms: default_reply_delay_max(),
        }
    }
}

impl AgentConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.reply_delay_min_ms > self.reply_delay_max_ms {
            return Err(Error::Config(format!(
                "agent.reply_delay_min_ms ({}) must not exceed agent.reply_delay_max_ms ({})",
                self.reply_delay_min_ms, self.reply_delay_max_ms
            )));
        }
        Ok(())
    }

    /// The reply delay bounds as a [`ReplyDelay`].
    pub fn reply_delay(&self) -> ReplyDelay {
        ReplyDelay::from_millis(self.reply_delay_min_ms, self.reply_delay_max_ms)
    }
}

fn default_reply_delay_min() -> u64 {
    1000
}

fn default_reply_delay_max() -> u64 {
    2000
}

/// Catalog source configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CatalogConfig {
    /// Path to a JSON catalog fixture; the bundled catalog is used when unset
    pub path: Option<PathBuf>,
}

/// Layout selection for the terminal UI
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreference {
    /// Pick compact or wide from the terminal width
    #[default]
    Auto,
    /// Always single-column
    Compact,
    /// Always two-column
    Wide,
}

/// Terminal UI configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default)]
    pub layout: LayoutPreference,

    /// Terminals narrower than this use the compact layout in `auto` mode
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutPreference::default(),
            compact_width: default_compact_width(),
        }
    }
}

fn default_compact_width() -> u16 {
    100
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.agent.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/yongyong/config.toml` (~/.config/yongyong/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("yongyong").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/yongyong/` (~/.local/state/yongyong/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("yongyong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.agent.persona, Persona::Helper);
        assert_eq!(config.agent.reply_delay_min_ms, 1000);
        assert_eq!(config.agent.reply_delay_max_ms, 2000);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.ui.layout, LayoutPreference::Auto);
        assert_eq!(config.ui.compact_width, 100);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[logging]
level = "debug"

[agent]
persona = "gatekeeper"
reply_delay_min_ms = 200
reply_delay_max_ms = 400

[catalog]
path = "/tmp/catalog.json"

[ui]
layout = "compact"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.max_files, 5);
        assert_eq!(config.agent.persona, Persona::Gatekeeper);
        assert_eq!(config.agent.reply_delay_min_ms, 200);
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(Path::new("/tmp/catalog.json"))
        );
        assert_eq!(config.ui.layout, LayoutPreference::Compact);
    }

    #[test]
    fn test_agent_delay_validation() {
        let config = AgentConfig::default();
        assert!(config.validate().is_ok());

        let config = AgentConfig {
            reply_delay_min_ms: 3000,
            reply_delay_max_ms: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Equal bounds mean a fixed delay
        let config = AgentConfig {
            reply_delay_min_ms: 500,
            reply_delay_max_ms: 500,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_inverted_delay() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[agent]\nreply_delay_min_ms = 900\nreply_delay_max_ms = 100\n",
        )
        .unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.agent.persona, Persona::Helper);
    }

    #[test]
    fn test_unknown_persona_is_rejected() {
        let toml = "[agent]\npersona = \"oracle\"\n";
        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
