//! File system access for import files

use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Reads import files as UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the whole file, reporting a missing path as [`Error::FileNotFound`]
    pub async fn read_all_text(&self, path: &Path) -> Result<String> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::file_not_found(path.display().to_string()))
            }
            Err(e) => Err(Error::io(
                format!("Failed to read file {}", path.display()),
                e,
            )),
        }
    }
}
