use crate::error::{NextVersionError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete configuration for next-version.
///
/// Every value here is a default the CLI can override per invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default prefix joined to versions when naming tags.
fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Returns the default glob used to list existing release tags.
fn default_tag_pattern() -> String {
    "v*".to_string()
}

/// Configuration for tag naming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            tag_prefix: default_tag_prefix(),
            tag_pattern: default_tag_pattern(),
        }
    }
}

/// Configuration for decision rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./nextversion.toml").exists() {
        fs::read_to_string("./nextversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|err| NextVersionError::config(err.to_string()))?;
    Ok(config)
}
