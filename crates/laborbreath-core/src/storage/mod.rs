mod contractions;

pub use contractions::ContractionStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/laborbreath[-dev]/` based on LABORBREATH_ENV.
///
/// Set LABORBREATH_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LABORBREATH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("laborbreath-dev")
    } else {
        base_dir.join("laborbreath")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
