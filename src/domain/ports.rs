use crate::utils::error::Result;
use std::io::BufRead;

/// Opens the text behind a location identifier as a line reader.
///
/// The returned reader is owned by the caller, so the handle is released when
/// it is dropped, whether parsing succeeded or not.
pub trait LocationSource {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>>;

    /// Display name for the location stored at `path`.
    fn name_of(&self, path: &str) -> String {
        std::path::Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.to_string())
    }
}
