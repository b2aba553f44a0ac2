use crate::format::CsvRecordProducer;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;

pub const DEFAULT_APPLICATION_ID: &str = "bocli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV: &str = "BOCLI_CONFIG_DIR";

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_MAX_FOLDER_DEPTH: usize = 64;
/// Page size used for infostore listings. There is no pagination loop, so a
/// folder with more children than this is silently truncated.
pub const DEFAULT_PAGE_SIZE: usize = 10000;
pub const DEFAULT_USERNAME: &str = "Administrator";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("invalid configuration value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Where and how to reach the BI platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub content_type: String,
    /// Skip TLS certificate verification. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
    /// Request timeout; requests block indefinitely when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept_invalid_certs: false,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server: ServerSettings,
    pub max_folder_depth: usize,
    pub page_size: usize,
    pub username: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            max_folder_depth: DEFAULT_MAX_FOLDER_DEPTH,
            page_size: DEFAULT_PAGE_SIZE,
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for BOCLI_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut default_config_file_path) => {
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default configuration file, falling back to defaults when
    /// the file does not exist yet.
    pub fn load_or_default() -> Result<Configuration, ConfigurationError> {
        let path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", path.display());

        if !path.exists() {
            debug!("Configuration file not found, using defaults");
            return Ok(Configuration::default());
        }
        Configuration::load_from_file(path)
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        let configuration = fs::read_to_string(path)
            .map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        let configuration: Configuration =
            serde_yaml::from_str(&configuration).map_err(|cause| {
                ConfigurationError::FailedToLoadData {
                    cause: Box::new(cause),
                }
            })?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.page_size == 0 {
            return Err(ConfigurationError::InvalidValue {
                name: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        match path.parent() {
            Some(directory) => {
                if fs::create_dir_all(directory).is_err() {
                    return Err(ConfigurationError::FailedToFindConfigurationDirectory);
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        self.write(Box::new(file))
    }
}

impl CsvRecordProducer for Configuration {
    fn csv_header() -> Vec<String> {
        [
            "PROTOCOL",
            "HOST",
            "PORT",
            "ACCEPT_INVALID_CERTS",
            "MAX_FOLDER_DEPTH",
            "PAGE_SIZE",
            "USERNAME",
        ]
        .iter()
        .map(|column| column.to_string())
        .collect()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.server.protocol.clone(),
            self.server.host.clone(),
            self.server.port.to_string(),
            self.server.accept_invalid_certs.to_string(),
            self.max_folder_depth.to_string(),
            self.page_size.to_string(),
            self.username.clone(),
        ]]
    }
}
