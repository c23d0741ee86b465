use config::{Config, Environment, File};
use error_stack::{Result, ResultExt};
use thiserror::Error;

use super::upload_config::{UploadConfig, DEFAULT_ENDPOINT, DEFAULT_SHEET_NAME};
use super::workbook_config::{WorkbookConfig, DEFAULT_DIRECTORY};

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "Config";
pub const ENV_PREFIX: &str = "SHEET_UPLOAD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config file '{0}'")]
    Build(String),
    #[error("Failed to deserialize config file '{0}'")]
    Deserialize(String),
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub upload: UploadConfig,
    pub workbook: WorkbookConfig,
}

impl AppConfig {
    /// Loads the config file named by `CONFIG_PATH` (default `Config`), if
    /// present, on top of the built-in defaults. `SHEET_UPLOAD__*`
    /// environment variables override both.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let build_error = || ConfigError::Build(config_path.to_string());

        let config = Config::builder()
            .set_default("upload.endpoint", DEFAULT_ENDPOINT)
            .change_context_lazy(build_error)?
            .set_default("upload.sheet_name", DEFAULT_SHEET_NAME)
            .change_context_lazy(build_error)?
            .set_default("workbook.directory", DEFAULT_DIRECTORY)
            .change_context_lazy(build_error)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .change_context_lazy(build_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .change_context_lazy(|| ConfigError::Deserialize(config_path.to_string()))?;

        log::debug!("Loaded config: {:?}", app_config);
        Ok(app_config)
    }
}
