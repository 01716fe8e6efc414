use crate::core::atlas::Atlas;
use crate::core::loader::LocationLoader;
use crate::core::LocationSource;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please give a valid file path (\"\" to start): ";

/// Console loop that asks for location files until an empty line.
pub struct Session<S: LocationSource> {
    loader: LocationLoader<S>,
}

impl<S: LocationSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            loader: LocationLoader::new(source),
        }
    }

    /// Prompts on `output`, reading one path per line from `input`.
    ///
    /// Stops on an empty line or end of input. A path that fails to load is
    /// reported and the prompt repeats; only I/O errors on the console abort.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<Atlas> {
        let mut atlas = Atlas::new();
        let mut lines = input.lines();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let path = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            let path = path.trim();
            if path.is_empty() {
                break;
            }

            match self.loader.load(path) {
                Ok(location) => {
                    tracing::info!("Loaded '{}' ({} rolls)", location.name(), location.len());
                    if let Some(previous) = atlas.insert(location) {
                        tracing::warn!("Replaced previously loaded '{}'", previous.name());
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load '{}': {}", path, e);
                    writeln!(output, "{}", e.user_friendly_message())?;
                }
            }
        }

        Ok(atlas)
    }
}
