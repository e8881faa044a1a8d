//! File reading utilities

use crate::error::{LogindashError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(LogindashError::from)
}

/// Read first line of a file, trimmed
/// Meant for single-line files like /proc/sys/kernel/hostname
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = read_file_safe(path)?;
    Ok(content.lines().next().unwrap_or("").trim().to_string())
}
