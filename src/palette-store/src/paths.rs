//! OS-aware location for the palette database.
//!
//! - **Windows**: `%APPDATA%\Palette\`
//! - **macOS**: `~/Library/Application Support/Palette/`
//! - **Linux**: `~/.local/share/Palette/`

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, StoreError};

/// Application name used for the storage directory.
pub const APP_NAME: &str = "Palette";

/// Database file name inside the data directory.
pub const DB_FILE: &str = "palette.db";

/// Resolve the platform data directory for Palette.
///
/// Honors `PALETTE_DATA_DIR` as an override before falling back to the
/// OS-specific default.
pub fn palette_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PALETTE_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let dir = dirs::data_dir()
        .map(|d| d.join(APP_NAME))
        .ok_or(StoreError::HomeDirNotFound)?;
    debug!(data_dir = %dir.display(), "resolved palette data directory");
    Ok(dir)
}

/// Default path of the database file, creating the parent directory.
pub fn default_db_path() -> Result<PathBuf> {
    let dir = palette_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join(DB_FILE))
}
