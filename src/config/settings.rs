//! Serial settings value and construction from configuration.
//!
//! Settings are a plain value describing how a channel will be configured,
//! kept separate from the live transport so they can be built and tested
//! without touching hardware.

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Baud rate used when none is configured.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Settings for configuring a serial channel.
///
/// Treated as immutable once constructed. The baud rate is passed through to
/// the driver unvalidated; whether it is a rate the device accepts is the
/// driver's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialSettings {
    /// System path to the serial port (e.g., "/dev/ttyUSB0" or "COM3").
    pub port: Option<String>,
    /// Baud rate in bits per second.
    pub baud_rate: u32,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl SerialSettings {
    /// Create settings from explicit field values.
    pub fn new(port: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            port: Some(port.into()),
            baud_rate,
        }
    }

    /// Construct settings from a configuration mapping.
    ///
    /// Requires both `port` (string) and `baud_rate` (integer); an absent key
    /// fails with [`ConfigError::MissingKey`] and constructs nothing.
    pub fn from_config(config: &toml::Table) -> ConfigResult<Self> {
        let port = require(config, "port")?
            .as_str()
            .ok_or_else(|| ConfigError::wrong_type("port", "string"))?
            .to_string();

        let baud_rate = require(config, "baud_rate")?
            .as_integer()
            .ok_or_else(|| ConfigError::wrong_type("baud_rate", "integer"))?;
        let baud_rate = u32::try_from(baud_rate)
            .map_err(|_| ConfigError::wrong_type("baud_rate", "32-bit unsigned integer"))?;

        Ok(Self {
            port: Some(port),
            baud_rate,
        })
    }

    /// Construct settings from a TOML file whose root table is the mapping.
    pub fn from_config_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table: toml::Table = contents.parse()?;
        Self::from_config(&table)
    }
}

fn require<'a>(config: &'a toml::Table, key: &str) -> ConfigResult<&'a toml::Value> {
    config.get(key).ok_or_else(|| ConfigError::missing_key(key))
}
