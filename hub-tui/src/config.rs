//! Configuration loading for the analytics hub TUI.
//!
//! A TOML file is optional. Without `--config` or `HUB_TUI_CONFIG` the
//! built-in defaults are used; with one, omitted keys take the same
//! defaults and unknown keys are rejected.

use hub_core::{ChartKind, SortField, Variant, DEFAULT_RECORD_COUNT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound on generated records; the pipeline recomputes in full per event.
pub const MAX_RECORD_COUNT: usize = 1_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    pub variant: Variant,
    pub record_count: usize,
    pub seed: Option<u64>,
    pub load_latency_ms: u64,
    pub debounce_ms: u64,
    pub tick_rate_ms: u64,
    pub initial_sort: SortField,
    pub initial_chart: ChartKind,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeConfig {
    /// Overrides the variant's own palette when set.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    pub path: PathBuf,
    pub level: String,
    pub json: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Cyber,
            record_count: DEFAULT_RECORD_COUNT,
            seed: None,
            load_latency_ms: 600,
            debounce_ms: 300,
            tick_rate_ms: 50,
            initial_sort: SortField::Id,
            initial_chart: ChartKind::Bar,
            theme: ThemeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("hub-tui.log"),
            level: "hub_tui=info,hub_core=info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value after --config")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = match config_path_from_args()?.or_else(config_path_from_env) {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: TuiConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.record_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "record_count",
                reason: "must be > 0".to_string(),
            });
        }
        if self.record_count > MAX_RECORD_COUNT {
            return Err(ConfigError::InvalidValue {
                field: "record_count",
                reason: format!("must be <= {}", MAX_RECORD_COUNT),
            });
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "debounce_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.tick_rate_ms > self.debounce_ms {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_ms",
                reason: "must be <= debounce_ms".to_string(),
            });
        }
        if !self.variant.supports_field(self.initial_sort) {
            return Err(ConfigError::InvalidValue {
                field: "initial_sort",
                reason: format!("{} is not a {} column", self.initial_sort, self.variant),
            });
        }
        if !self.variant.supports_chart(self.initial_chart) {
            return Err(ConfigError::InvalidValue {
                field: "initial_chart",
                reason: format!("{} is not offered by {}", self.initial_chart, self.variant),
            });
        }
        if let Some(name) = &self.theme.name {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "theme.name",
                    reason: "must not be empty".to_string(),
                });
            }
            let theme = name.trim().to_ascii_lowercase();
            if theme != "cyber" && theme != "classic" {
                return Err(ConfigError::InvalidValue {
                    field: "theme.name",
                    reason: "only 'cyber' and 'classic' are supported".to_string(),
                });
            }
        }
        if self.logging.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("HUB_TUI_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Result<Option<PathBuf>, ConfigError> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args
                .next()
                .map(|path| Some(PathBuf::from(path)))
                .ok_or(ConfigError::MissingConfigPath);
        }
    }
    Ok(None)
}
