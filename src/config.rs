use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::KeyCode;
use serde::Deserialize;

use crate::system::history::DEFAULT_CAPACITY;
use crate::system::top::DEFAULT_TOP_PROCESSES;

const MIN_INTERVAL_MS: u64 = 100;
const MIN_HISTORY_SIZE: usize = 2;
const MAX_HISTORY_SIZE: usize = 86_400;
const MAX_TOP_PROCESSES: usize = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub chart_interval_ms: u64,
    pub process_interval_ms: u64,
    pub history_size: usize,
    pub top_processes: usize,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            chart_interval_ms: 2000,
            process_interval_ms: 5000,
            history_size: DEFAULT_CAPACITY,
            top_processes: DEFAULT_TOP_PROCESSES,
            log_file: None,
        }
    }
}

impl GeneralConfig {
    pub fn chart_interval(&self) -> Duration {
        Duration::from_millis(self.chart_interval_ms)
    }

    pub fn process_interval(&self) -> Duration {
        Duration::from_millis(self.process_interval_ms)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub theme: String,
    /// Optional `#rrggbb` override for the chart and gauges.
    pub meter_fg: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            theme: "dark".to_string(),
            meter_fg: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct KeybindsConfig {
    pub quit: String,
    pub refresh: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            refresh: "r".to_string(),
        }
    }
}

impl Config {
    /// Clamp values that would break the monitor: zero-length intervals,
    /// a history too short to chart or too large to hold, and top lists that
    /// are empty or taller than any terminal.
    pub fn sanitized(mut self) -> Self {
        let general = &mut self.general;
        general.chart_interval_ms = general.chart_interval_ms.max(MIN_INTERVAL_MS);
        general.process_interval_ms = general.process_interval_ms.max(MIN_INTERVAL_MS);
        general.history_size = general
            .history_size
            .clamp(MIN_HISTORY_SIZE, MAX_HISTORY_SIZE);
        general.top_processes = general.top_processes.clamp(1, MAX_TOP_PROCESSES);
        self
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("memwatch").join("config.toml"))
}

/// A config file that exists but could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("invalid config {}: {source}", .path.display())]
pub struct ConfigError {
    pub path: PathBuf,
    #[source]
    pub source: toml::de::Error,
}

/// Config loaded from disk, plus the parse error if the file was rejected.
/// Loading runs before logging starts, so the caller reports the error.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub error: Option<ConfigError>,
}

pub fn load_config() -> LoadedConfig {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => LoadedConfig::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> LoadedConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return LoadedConfig::default();
    };
    match toml::from_str(&contents) {
        Ok(config) => LoadedConfig {
            config,
            error: None,
        },
        Err(source) => LoadedConfig {
            config: Config::default(),
            error: Some(ConfigError {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.chart_interval_ms, 2000);
        assert_eq!(config.general.process_interval_ms, 5000);
        assert_eq!(config.general.history_size, 60);
        assert_eq!(config.general.top_processes, 6);
        assert!(config.general.log_file.is_none());
        assert_eq!(config.colors.theme, "dark");
        assert_eq!(config.keybinds.quit, "q");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
chart_interval_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.chart_interval_ms, 500);
        // Other fields should be defaults
        assert_eq!(config.general.process_interval_ms, 5000);
        assert_eq!(config.colors.theme, "dark");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r##"
[general]
chart_interval_ms = 1000
process_interval_ms = 3000
history_size = 120
top_processes = 10
log_file = "/tmp/memwatch.log"

[colors]
theme = "light"
meter_fg = "#1dacd6"

[keybinds]
quit = "x"
refresh = "Space"
"##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.chart_interval(), Duration::from_secs(1));
        assert_eq!(config.general.process_interval(), Duration::from_secs(3));
        assert_eq!(config.general.history_size, 120);
        assert_eq!(config.general.top_processes, 10);
        assert_eq!(
            config.general.log_file.as_deref(),
            Some(Path::new("/tmp/memwatch.log"))
        );
        assert_eq!(config.colors.theme, "light");
        assert_eq!(config.colors.meter_fg, "#1dacd6");
        assert_eq!(parse_key(&config.keybinds.quit), Some(KeyCode::Char('x')));
        assert_eq!(parse_key(&config.keybinds.refresh), Some(KeyCode::Char(' ')));
    }

    #[test]
    fn sanitize_clamps_degenerate_values() {
        let mut config = Config::default();
        config.general.chart_interval_ms = 0;
        config.general.process_interval_ms = 10;
        config.general.history_size = 0;
        config.general.top_processes = 0;
        let config = config.sanitized();
        assert_eq!(config.general.chart_interval_ms, 100);
        assert_eq!(config.general.process_interval_ms, 100);
        assert_eq!(config.general.history_size, 2);
        assert_eq!(config.general.top_processes, 1);
    }

    #[test]
    fn sanitize_caps_oversized_values() {
        let mut config = Config::default();
        config.general.history_size = usize::MAX;
        config.general.top_processes = 65_535;
        let config = config.sanitized();
        assert_eq!(config.general.history_size, 86_400);
        assert_eq!(config.general.top_processes, 100);
    }

    #[test]
    fn parse_key_rejects_words() {
        assert_eq!(parse_key("Esc"), Some(KeyCode::Esc));
        assert_eq!(parse_key("quit"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn missing_file_returns_default() {
        let loaded = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(loaded.config.general.chart_interval_ms, 2000);
        assert!(loaded.error.is_none());
    }

    #[test]
    fn valid_file_has_no_error() {
        let temp = std::env::temp_dir().join("memwatch_test_valid.toml");
        std::fs::write(&temp, "[general]\ntop_processes = 3\n").unwrap();
        let loaded = load_config_from_path(&temp);
        assert_eq!(loaded.config.general.top_processes, 3);
        assert!(loaded.error.is_none());
        let _ = std::fs::remove_file(&temp);
    }

    #[test]
    fn invalid_toml_returns_default_and_error() {
        let temp = std::env::temp_dir().join("memwatch_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let loaded = load_config_from_path(&temp);
        assert_eq!(loaded.config.general.chart_interval_ms, 2000);
        let err = loaded.error.expect("parse error is returned to the caller");
        assert_eq!(err.path, temp);
        assert!(err.to_string().starts_with("invalid config "));
        let _ = std::fs::remove_file(&temp);
    }
}
