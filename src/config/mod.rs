pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "dice-locations"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Load dice-roll location files and list their names")
)]
pub struct CliConfig {
    /// Location files to load; prompts interactively when none are given
    pub paths: Vec<String>,

    /// TOML file listing locations to load
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Directory that location paths are relative to
    #[cfg_attr(feature = "cli", arg(long))]
    pub base_dir: Option<String>,

    /// Roll once at the named location
    #[cfg_attr(feature = "cli", arg(long))]
    pub roll: Option<String>,

    /// Seed for the roll, for reproducible results
    #[cfg_attr(feature = "cli", arg(long))]
    pub seed: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "text"))]
    pub format: OutputFormat,

    /// Warn about destinations that name no loaded location
    #[cfg_attr(feature = "cli", arg(long))]
    pub check: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub json_logs: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_paths("paths", &self.paths)?;
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        if let Some(base_dir) = &self.base_dir {
            validation::validate_path("base_dir", base_dir)?;
        }
        if let Some(roll) = &self.roll {
            validation::validate_non_empty_string("roll", roll)?;
        }
        Ok(())
    }
}
