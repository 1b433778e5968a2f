mod day;

pub use day::{DayRecord, DayStore};

use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Returns the log directory, `~/.75zen` by default.
///
/// Set ZEN75_DIR to point the tracker at a different directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var("ZEN75_DIR") {
        Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir()
            .ok_or_else(|| CoreError::DataDir("home directory could not be determined".into()))?
            .join(".75zen"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
