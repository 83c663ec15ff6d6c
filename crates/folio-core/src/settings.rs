// ABOUTME: Per-session agent configuration
// ABOUTME: In-memory only, discarded when the user leaves the agent view

use serde::{Deserialize, Serialize};

pub const MAX_TOKENS_MIN: u32 = 512;
pub const MAX_TOKENS_MAX: u32 = 4096;
pub const MAX_TOKENS_STEP: u32 = 256;
pub const TEMPERATURE_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Local,
    Api,
    Database,
    File,
}

impl DataSource {
    pub const ALL: [DataSource; 4] = [
        DataSource::Local,
        DataSource::Api,
        DataSource::Database,
        DataSource::File,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DataSource::Local => "Local Files",
            DataSource::Api => "External API",
            DataSource::Database => "Database",
            DataSource::File => "File Upload",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Text,
    Json,
    Csv,
    Xml,
}

impl InputFormat {
    pub const ALL: [InputFormat; 4] = [
        InputFormat::Text,
        InputFormat::Json,
        InputFormat::Csv,
        InputFormat::Xml,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputFormat::Text => "Text",
            InputFormat::Json => "JSON",
            InputFormat::Csv => "CSV",
            InputFormat::Xml => "XML",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Chart,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Table,
        OutputFormat::Chart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Text => "Text",
            OutputFormat::Json => "JSON",
            OutputFormat::Table => "Table",
            OutputFormat::Chart => "Chart",
        }
    }
}

/// Session-scoped tuning knobs shown on the settings tab. Values are clamped
/// on write so the rest of the app can trust the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentSettings {
    pub data_source: DataSource,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
    pub max_tokens: u32,
    pub temperature: f32,
    pub auto_execute: bool,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            data_source: DataSource::Local,
            input_format: InputFormat::Text,
            output_format: OutputFormat::Text,
            max_tokens: 2048,
            temperature: 0.7,
            auto_execute: false,
        }
    }
}

impl AgentSettings {
    pub fn set_max_tokens(&mut self, value: u32) {
        self.max_tokens = value.clamp(MAX_TOKENS_MIN, MAX_TOKENS_MAX);
    }

    pub fn set_temperature(&mut self, value: f32) {
        self.temperature = value.clamp(0.0, 1.0);
    }

    /// Step max_tokens up or down by one slider notch.
    pub fn step_max_tokens(&mut self, up: bool) {
        let next = if up {
            self.max_tokens.saturating_add(MAX_TOKENS_STEP)
        } else {
            self.max_tokens.saturating_sub(MAX_TOKENS_STEP)
        };
        self.set_max_tokens(next);
    }

    /// Step temperature up or down by one slider notch.
    pub fn step_temperature(&mut self, up: bool) {
        let delta = if up {
            TEMPERATURE_STEP
        } else {
            -TEMPERATURE_STEP
        };
        self.set_temperature(self.temperature + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AgentSettings::default();
        assert_eq!(s.data_source, DataSource::Local);
        assert_eq!(s.input_format, InputFormat::Text);
        assert_eq!(s.output_format, OutputFormat::Text);
        assert_eq!(s.max_tokens, 2048);
        assert!((s.temperature - 0.7).abs() < f32::EPSILON);
        assert!(!s.auto_execute);
    }

    #[test]
    fn test_max_tokens_clamps_to_range() {
        let mut s = AgentSettings::default();
        s.set_max_tokens(100);
        assert_eq!(s.max_tokens, MAX_TOKENS_MIN);
        s.set_max_tokens(10_000);
        assert_eq!(s.max_tokens, MAX_TOKENS_MAX);
    }

    #[test]
    fn test_temperature_clamps_to_unit_interval() {
        let mut s = AgentSettings::default();
        s.set_temperature(-0.5);
        assert_eq!(s.temperature, 0.0);
        s.set_temperature(1.5);
        assert_eq!(s.temperature, 1.0);
    }

    #[test]
    fn test_stepping_respects_bounds() {
        let mut s = AgentSettings::default();
        s.set_max_tokens(MAX_TOKENS_MAX);
        s.step_max_tokens(true);
        assert_eq!(s.max_tokens, MAX_TOKENS_MAX);
        s.set_max_tokens(MAX_TOKENS_MIN);
        s.step_max_tokens(false);
        assert_eq!(s.max_tokens, MAX_TOKENS_MIN);

        s.set_temperature(1.0);
        s.step_temperature(true);
        assert_eq!(s.temperature, 1.0);
        s.set_temperature(0.0);
        s.step_temperature(false);
        assert_eq!(s.temperature, 0.0);
    }
}
