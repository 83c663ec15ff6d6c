// ABOUTME: Configuration file handling.
// ABOUTME: TOML config with env var and .env support.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::session::LatencyRange;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "default".to_string()
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_latency_min")]
    pub latency_min_ms: u64,
    #[serde(default = "default_latency_max")]
    pub latency_max_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: default_latency_min(),
            latency_max_ms: default_latency_max(),
        }
    }
}

fn default_latency_min() -> u64 {
    2000
}

fn default_latency_max() -> u64 {
    4000
}

impl DemoConfig {
    /// The simulated response delay range. A max below the min collapses to
    /// a fixed delay rather than erroring.
    pub fn latency(&self) -> LatencyRange {
        if self.latency_max_ms > self.latency_min_ms {
            LatencyRange {
                min_ms: self.latency_min_ms,
                max_ms: self.latency_max_ms,
            }
        } else {
            LatencyRange::fixed(self.latency_min_ms)
        }
    }
}

impl Config {
    /// Load config with precedence: CLI > env > .env > file > defaults
    pub fn load(theme_override: Option<&str>, latency_override: Option<u64>) -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        // Start with file config or defaults
        let mut config = match Self::config_path() {
            Ok(path) => Self::load_from(&path).unwrap_or_default(),
            Err(_) => Self::default(),
        };

        // Apply env var overrides
        if let Ok(theme) = std::env::var("FOLIO_THEME") {
            config.appearance.theme = theme;
        }
        if let Ok(ms) = std::env::var("FOLIO_LATENCY_MS") {
            if let Ok(ms) = ms.parse::<u64>() {
                config.demo.latency_min_ms = ms;
                config.demo.latency_max_ms = ms;
            }
        }

        // Apply CLI overrides (highest priority)
        if let Some(theme) = theme_override {
            config.appearance.theme = theme.to_string();
        }
        if let Some(ms) = latency_override {
            config.demo.latency_min_ms = ms;
            config.demo.latency_max_ms = ms;
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("folio").join("config.toml"))
    }
}
