use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::ModverConfig;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved output settings; command line flags win over modver.toml
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub color: bool,
}

impl Output {
    pub fn resolve(config: Option<&ModverConfig>, format: Option<OutputFormat>, no_color: bool) -> Self {
        let (config_format, config_color) = config
            .map(|c| (c.output.format, c.output.color))
            .unwrap_or((OutputFormat::Text, true));

        Output {
            format: format.unwrap_or(config_format),
            color: config_color && !no_color,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
