use crate::shared::error::NotifierError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that an input file can be read safely
///
/// Uses `symlink_metadata()` so the link itself is checked, not its target.
///
/// # Errors
/// Returns an error if the path is missing, is a symbolic link, is not a
/// regular file, or is larger than `max_size`
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| NotifierError::FixtureNotFound {
        path: path.to_path_buf(),
        suggestion: format!("Check that the file exists and is readable ({})", e),
    })?;

    if metadata.is_symlink() {
        return Err(NotifierError::InvalidFixturePath {
            path: path.to_path_buf(),
            reason: "Security: symbolic links are not allowed".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(NotifierError::InvalidFixturePath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(NotifierError::InvalidFixturePath {
            path: path.to_path_buf(),
            reason: format!(
                "Security: file is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
        }
        .into());
    }

    Ok(())
}
