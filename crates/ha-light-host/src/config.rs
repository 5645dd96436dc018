//! Host configuration from the environment

use std::str::FromStr;
use thiserror::Error;
use zigbee_ha::MAX_ENDPOINTS;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid LIGHT_ENDPOINT: {0}")]
    InvalidEndpoint(String),

    #[error("LIGHT_ENDPOINT {index} out of range (table holds {capacity})")]
    EndpointOutOfRange { index: usize, capacity: usize },

    #[error("Unknown LIGHT_COLOR_MODEL: {0} (expected xy or hue-saturation)")]
    UnknownColorModel(String),
}

/// Which color representation the hosted light keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModelKind {
    #[default]
    Xy,
    HueSaturation,
}

impl FromStr for ColorModelKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "hue-saturation" => Ok(Self::HueSaturation),
            other => Err(ConfigError::UnknownColorModel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Slot the light is bound to
    pub endpoint: usize,
    pub color_model: ColorModelKind,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            endpoint: 1,
            color_model: ColorModelKind::default(),
        }
    }
}

impl HostConfig {
    /// Read `LIGHT_ENDPOINT` and `LIGHT_COLOR_MODEL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("LIGHT_ENDPOINT") {
            let index: usize = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEndpoint(raw.clone()))?;
            if index >= MAX_ENDPOINTS {
                return Err(ConfigError::EndpointOutOfRange {
                    index,
                    capacity: MAX_ENDPOINTS,
                });
            }
            config.endpoint = index;
        }

        if let Some(raw) = lookup("LIGHT_COLOR_MODEL") {
            config.color_model = raw.parse()?;
        }

        Ok(config)
    }
}
