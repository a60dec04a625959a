//! Tool configuration
//!
//! Both tools work without any configuration. An optional JSON file can
//! change the defaults; explicit command-line options still win over it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::delay::DelayUnit;
use crate::engine::noise::NoiseConfig;
use crate::error::{Result, WavToolError};

/// Output path used by the delay tool when none is given
pub const DEFAULT_DELAY_OUTPUT: &str = "delay.wav";

/// Settings shared by the command-line tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// How the delay tool reads its `delay` argument
    pub delay_unit: DelayUnit,
    /// Delay tool output path when the positional argument is omitted
    pub default_output: PathBuf,
    /// Noise generator settings
    pub noise: NoiseConfig,
    /// Fixed seed for random filler and noise
    pub seed: Option<u64>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            delay_unit: DelayUnit::default(),
            default_output: PathBuf::from(DEFAULT_DELAY_OUTPUT),
            noise: NoiseConfig::default(),
            seed: None,
        }
    }
}

impl ToolConfig {
    /// Load and validate a configuration file
    ///
    /// # Errors
    /// * `Io` - If the file cannot be read
    /// * `Config` - If the file is not valid JSON for this structure
    /// * `Argument` - If a value is out of range
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| WavToolError::io(path, e))?;
        let config = Self::from_json(&text).map_err(|e| match e {
            WavToolError::Config { source, .. } => WavToolError::Config {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;

        debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ToolConfig =
            serde_json::from_str(text).map_err(|source| WavToolError::Config {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_output.as_os_str().is_empty() {
            return Err(WavToolError::argument("default_output must not be empty"));
        }
        self.noise.validate()
    }
}
