use crate::crop::{FloorPolicy, MinimumSize, TrimSpec};
use crate::logging::LoggingConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults for a crop run, loaded from TOML or JSON
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub floor: FloorPolicy,
    pub trim: TrimSpec,
    pub minimum: MinimumSize,
    pub logging: LoggingConfig,
}

/// Per-run values that take precedence over the file; `None` keeps the file's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropOverrides {
    pub top: Option<u32>,
    pub bottom: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub floor: Option<FloorPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> crate::Result<()> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Apply `overrides` and validate the result the same way a loaded file is validated
    pub fn with_overrides(&self, overrides: &CropOverrides) -> crate::Result<Config> {
        let config = Config {
            floor: overrides.floor.unwrap_or(self.floor),
            trim: TrimSpec {
                top: overrides.top.unwrap_or(self.trim.top),
                bottom: overrides.bottom.unwrap_or(self.trim.bottom),
                left: overrides.left.unwrap_or(self.trim.left),
                right: overrides.right.unwrap_or(self.trim.right),
            },
            minimum: MinimumSize {
                min_width: overrides.min_width.unwrap_or(self.minimum.min_width),
                min_height: overrides.min_height.unwrap_or(self.minimum.min_height),
            },
            logging: self.logging.clone(),
        };

        config
            .validate()
            .map_err(|errors| anyhow::anyhow!("Invalid crop settings: {}", errors.join("; ")))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.minimum.min_width == 0 {
            errors.push("minimum.min_width must be at least 1".to_string());
        }

        if self.minimum.min_height == 0 {
            errors.push("minimum.min_height must be at least 1".to_string());
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Load `config_path`, falling back to defaults when it is missing or invalid.
///
/// Runs before logging is up, so problems go to stderr.
pub fn load_config_or_default(config_path: Option<&Path>) -> Config {
    match config_path {
        Some(path) => match Config::load_from_file(path) {
            Ok(config) => {
                if let Err(errors) = config.validate() {
                    eprintln!("Configuration validation errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    eprintln!("Using default configuration instead.");
                    Config::default()
                } else {
                    config
                }
            }
            Err(e) => {
                eprintln!("Failed to load config from '{}': {:#}", path.display(), e);
                eprintln!("Using default configuration.");
                Config::default()
            }
        },
        None => Config::default(),
    }
}
