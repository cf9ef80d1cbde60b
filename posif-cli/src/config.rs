use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use posif_detect::DetectorConfig;

///
/// Contents of a `posif` TOML config file.
///
/// ```toml
/// [detector]
/// contamination = 0.05
/// merge_gap = 5
/// ```
///
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PosifConfig {
    pub detector: DetectorConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl PosifConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn try_from_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let contents = read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
