use crate::core::LocationSource;
use crate::utils::error::{LocationError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads location files from disk, relative to an optional base directory.
#[derive(Debug, Clone, Default)]
pub struct LocalFiles {
    base_path: Option<PathBuf>,
}

impl LocalFiles {
    pub fn new(base_path: Option<String>) -> Self {
        Self {
            base_path: base_path.map(PathBuf::from),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_path {
            Some(base) => base.join(path),
            None => Path::new(path).to_path_buf(),
        }
    }
}

impl LocationSource for LocalFiles {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>> {
        let full_path = self.resolve(path);

        // 目錄也能被 File::open 打開，先擋掉
        if full_path.is_dir() {
            return Err(LocationError::NotFound {
                path: full_path.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "is a directory"),
            });
        }

        let file = File::open(&full_path).map_err(|source| LocationError::NotFound {
            path: full_path.display().to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
