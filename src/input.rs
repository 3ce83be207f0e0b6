//! Input text loading

use crate::error::{Result, WordCountError};
use std::fs;
use std::path::Path;

/// Read the whole input file as UTF-8 text
///
/// # Errors
///
/// `WordCountError::InputRead` if the file is missing, unreadable, or not
/// valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| WordCountError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
