use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::output::OutputFormat;

/// The modver configuration file structure (modver.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModverConfig {
    /// Output configuration
    pub output: OutputConfig,
}

/// How results are printed
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: text or json
    pub format: OutputFormat,

    /// Colorize text output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl ModverConfig {
    /// Load configuration from modver.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join("modver.toml");

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: ModverConfig = toml::from_str(&content)
                    .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
                return Ok(Some(config));
            }

            // Move to parent directory
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
