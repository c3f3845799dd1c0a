use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    /// Page loaded at startup
    #[serde(default)]
    pub start_url: String,
    /// Scheme+host prefix every top-level navigation must match
    #[serde(default)]
    pub allowed_origin: String,
    /// Exit-confirmation window for a second back press, in milliseconds
    #[serde(default)]
    pub back_exit_grace_ms: i64,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?
            .set_default("start_url", default_config.start_url.clone())?
            .set_default("allowed_origin", default_config.allowed_origin.clone())?
            .set_default("back_exit_grace_ms", default_config.back_exit_grace_ms)?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            // The embedded defaults are complete, so a missing user file is fine
            log::info!("No user configuration file found; using embedded defaults");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// Validation shared by file loading and CLI overrides
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_url.is_empty() {
            return Err(ConfigError::NotFound(String::from("start_url")));
        }
        if self.allowed_origin.is_empty() {
            return Err(ConfigError::NotFound(String::from("allowed_origin")));
        }
        if !self.start_url.starts_with(&self.allowed_origin) {
            return Err(ConfigError::Message(format!(
                "start_url {} is outside the allowed origin {}",
                self.start_url, self.allowed_origin
            )));
        }
        if self.back_exit_grace_ms <= 0 {
            return Err(ConfigError::Message(String::from(
                "back_exit_grace_ms must be positive",
            )));
        }
        Ok(())
    }
}
