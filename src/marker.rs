//! The catalog marker file.
//!
//! The marker is created with `{}` when missing so a run always has the file
//! in its commit. An existing marker must hold valid JSON.

use std::fs;
use std::path::Path;

use crate::error::{AutoPrError, Result};

pub const DEFAULT_MARKER_CONTENT: &str = "{}";

/// What [`ensure_marker`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    /// The file was already there and was left alone
    Existing,
    /// The file was created with default content
    Created,
    /// Dry run: the file is missing and would have been created
    WouldCreate,
}

/// Create the marker with `{}` if it does not exist, including parent directories.
pub fn ensure_marker(path: &Path, dry_run: bool) -> Result<MarkerStatus> {
    if path.exists() {
        return Ok(MarkerStatus::Existing);
    }
    if dry_run {
        return Ok(MarkerStatus::WouldCreate);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_MARKER_CONTENT)?;

    Ok(MarkerStatus::Created)
}

/// Check that an existing marker parses as JSON. A missing marker passes.
pub fn validate_marker(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str::<serde_json::Value>(&content).map_err(|e| {
        AutoPrError::InvalidMarker {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    Ok(())
}
