//! File-level wrappers around the text patches.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::text_patch;

/// Uncomment the first occurrence of `target` in the file at `path`.
pub fn uncomment_in_file(path: &Path, target: &str, prefix: &str) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let patched = text_patch::uncomment(&content, target, prefix).ok_or_else(|| {
        AppError::PatchTargetNotFound { path: path.to_path_buf(), target: target.to_string() }
    })?;
    fs::write(path, patched)?;
    Ok(())
}

/// Replace every occurrence of `old` with `new` in the file at `path`.
pub fn replace_in_file(path: &Path, old: &str, new: &str) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let patched = text_patch::replace_all(&content, old, new).ok_or_else(|| {
        AppError::PatchTargetNotFound { path: path.to_path_buf(), target: old.to_string() }
    })?;
    fs::write(path, patched)?;
    Ok(())
}
