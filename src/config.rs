use crate::window::DEFAULT_PICKER_LIMIT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PickerConfig {
    // Max older/newer dates shown on each side of the sentinel
    pub limit: usize,
    // TUI mode: "interactive" or "simple"
    pub tui_mode: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    // No file means no log output at all
    pub file: Option<PathBuf>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PICKER_LIMIT,
            tui_mode: "interactive".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load `~/.flatpick/config.toml`, or defaults when it does not exist.
    pub fn new() -> Result<Self> {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".flatpick")
            .join("config.toml")
    }

    /// Simple mode from `FLATPICK_TUI` when set, otherwise from the config file.
    pub fn tui_simple(&self) -> bool {
        let from_env = std::env::var("FLATPICK_TUI").ok();
        self.tui_simple_with(from_env.as_deref())
    }

    fn tui_simple_with(&self, env_value: Option<&str>) -> bool {
        env_value
            .map(|v| {
                let v = v.to_lowercase();
                v == "0" || v == "false" || v == "simple"
            })
            .unwrap_or_else(|| self.picker.tui_mode.to_lowercase() == "simple")
    }
}
