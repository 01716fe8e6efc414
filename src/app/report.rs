use crate::config::toml_config::AtlasConfig;
use crate::config::OutputFormat;
use crate::core::atlas::Atlas;
use crate::core::loader::LocationLoader;
use crate::core::{LocationSource, Roll};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// Paths listed in the config file first, then those given on the command line.
pub fn collect_paths(file_config: Option<&AtlasConfig>, cli_paths: &[String]) -> Vec<String> {
    let mut paths: Vec<String> = file_config
        .map(|c| c.locations().to_vec())
        .unwrap_or_default();
    paths.extend(cli_paths.iter().cloned());
    paths
}

/// Loads every path, stopping at the first one that fails.
///
/// Unlike the interactive session there is nobody to ask for a corrected
/// path, so a bad entry aborts the whole load.
pub fn load_all<S: LocationSource>(loader: &LocationLoader<S>, paths: &[String]) -> Result<Atlas> {
    let mut atlas = Atlas::new();
    for path in paths {
        let location = loader.load(path)?;
        if let Some(previous) = atlas.insert(location) {
            tracing::warn!("Replaced previously loaded '{}'", previous.name());
        }
    }
    Ok(atlas)
}

pub fn roll_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Logs every unresolved destination and returns how many there were.
pub fn check_destinations(atlas: &Atlas) -> usize {
    let unresolved = atlas.unresolved_destinations();
    for (location, destination) in &unresolved {
        tracing::warn!("'{}' leads to unknown destination '{}'", location, destination);
    }
    unresolved.len()
}

pub fn write_names<W: Write>(out: &mut W, atlas: &Atlas, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for name in atlas.names() {
                writeln!(out, "{}", name)?;
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = atlas.names().collect();
            writeln!(out, "{}", serde_json::to_string(&names)?)?;
        }
    }
    Ok(())
}

pub fn write_roll<W: Write>(out: &mut W, roll: &Roll, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", roll.message())?;
            writeln!(out, "-> {}", roll.destination())?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(roll)?)?;
        }
    }
    Ok(())
}
